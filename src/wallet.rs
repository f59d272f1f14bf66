// NFT Auction Intents: typed contract calls for Clarity NFT auction marketplaces
//
// SPDX-License-Identifier: Apache-2.0
//
// Designed in 2019-2025 by Dr Maxim Orlovsky <orlovsky@ubideco.org>
// Written in 2024-2025 by Dr Maxim Orlovsky <orlovsky@ubideco.org>
//
// Copyright (C) 2019-2024 LNP/BP Standards Association, Switzerland.
// Copyright (C) 2024-2025 Laboratories for Ubiquitous Deterministic Computing (UBIDECO),
//                         Institute for Distributed and Cognitive Systems (InDCS), Switzerland.
// Copyright (C) 2019-2025 Dr Maxim Orlovsky.
// All rights under the above copyrights are reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except
// in compliance with the License. You may obtain a copy of the License at
//
//        http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License
// is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express
// or implied. See the License for the specific language governing permissions and limitations under
// the License.

//! Boundary to the wallet connector, which signs and broadcasts transactions on behalf of the user
//! and relays read-only queries to a node.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use clarity_callreq::{ClarityValue, ContractCallRequest, ReadOnlyQuery};

/// Identifier of a broadcast transaction, as reported by the wallet.
#[derive(Wrapper, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display, From)]
#[wrapper(Deref)]
#[display(inner)]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxId(String);

#[derive(Clone, Eq, PartialEq, Debug)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxReceipt {
    pub txid: TxId,
    /// Hex-encoded signed transaction, if the wallet shares it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_tx: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

impl TxReceipt {
    pub fn new(txid: impl Into<TxId>) -> Self { Self { txid: txid.into(), raw_tx: None, submitted_at: Utc::now() } }

    pub fn with_raw_tx(mut self, raw_tx: impl Into<String>) -> Self {
        self.raw_tx = Some(raw_tx.into());
        self
    }
}

/// Outcome of a contract-call prompt shown to the user.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum CallOutcome {
    /// The user approved the call and the wallet broadcast the transaction.
    Finished(TxReceipt),
    /// The user rejected or closed the approval prompt; nothing was broadcast.
    Cancelled,
}

impl CallOutcome {
    pub fn receipt(&self) -> Option<&TxReceipt> {
        match self {
            CallOutcome::Finished(receipt) => Some(receipt),
            CallOutcome::Cancelled => None,
        }
    }

    pub fn is_cancelled(&self) -> bool { matches!(self, CallOutcome::Cancelled) }
}

#[derive(Clone, Eq, PartialEq, Debug, Display, Error)]
#[display(doc_comments)]
pub enum WalletError {
    /// wallet is not available - {0}
    Unavailable(String),

    /// wallet refused the request - {0}
    Rejected(String),

    /// read-only query failed - {0}
    Query(String),
}

#[async_trait]
pub trait WalletConnector: Send + Sync {
    /// Asks the user to approve the call and, once approved, broadcasts the transaction.
    async fn contract_call(&self, request: ContractCallRequest) -> Result<CallOutcome, WalletError>;

    async fn read_only_query(&self, query: ReadOnlyQuery) -> Result<ClarityValue, WalletError>;
}

#[async_trait]
impl<W: WalletConnector + ?Sized> WalletConnector for Arc<W> {
    async fn contract_call(&self, request: ContractCallRequest) -> Result<CallOutcome, WalletError> {
        self.as_ref().contract_call(request).await
    }

    async fn read_only_query(&self, query: ReadOnlyQuery) -> Result<ClarityValue, WalletError> {
        self.as_ref().read_only_query(query).await
    }
}
