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

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use nftauction::{
    CallOutcome, ClarityValue, ContractCallRequest, MarketConfig, Network, ReadOnlyQuery, SessionContext,
    TxReceipt, WalletConnector, WalletError,
};
use tokio::sync::{mpsc, Notify};

pub const DEPLOYER: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";
pub const BIDDER: &str = "ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG";

pub fn config() -> MarketConfig { MarketConfig::new(Network::Mocknet, format!("{DEPLOYER}.auction").parse().unwrap()) }

pub fn bidder() -> SessionContext { SessionContext::signed_in(BIDDER.parse().unwrap()) }

/// What the user does with the approval prompt.
#[derive(Clone, Debug)]
pub enum Reply {
    Approve(&'static str),
    Cancel,
    Fail(&'static str),
}

/// Wallet whose approval prompt is answered through a channel and whose read-only queries return
/// scripted answers.
pub struct MockWallet {
    requests: Mutex<Vec<ContractCallRequest>>,
    replies: tokio::sync::Mutex<mpsc::UnboundedReceiver<Reply>>,
    prompted: Notify,
    queries: AtomicUsize,
    answers: Mutex<VecDeque<Result<ClarityValue, WalletError>>>,
}

impl MockWallet {
    pub fn new() -> (Self, mpsc::UnboundedSender<Reply>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let wallet = Self {
            requests: Mutex::new(vec![]),
            replies: tokio::sync::Mutex::new(rx),
            prompted: Notify::new(),
            queries: AtomicUsize::new(0),
            answers: Mutex::new(VecDeque::new()),
        };
        (wallet, tx)
    }

    /// Wallet which approves every call with the given transaction id.
    pub fn approving(txid: &'static str) -> Self {
        let (wallet, tx) = Self::new();
        for _ in 0..16 {
            tx.send(Reply::Approve(txid)).unwrap();
        }
        wallet
    }

    pub fn requests(&self) -> Vec<ContractCallRequest> { self.requests.lock().unwrap().clone() }

    pub fn query_count(&self) -> usize { self.queries.load(Ordering::SeqCst) }

    /// Completes once a contract call is shown to the user.
    pub async fn prompted(&self) { self.prompted.notified().await }

    /// Queues answers to the following read-only queries; once they run out queries return `none`.
    pub fn answer(&self, answers: impl IntoIterator<Item = Result<ClarityValue, WalletError>>) {
        self.answers.lock().unwrap().extend(answers);
    }
}

#[async_trait]
impl WalletConnector for MockWallet {
    async fn contract_call(&self, request: ContractCallRequest) -> Result<CallOutcome, WalletError> {
        self.requests.lock().unwrap().push(request);
        self.prompted.notify_one();
        match self.replies.lock().await.recv().await {
            Some(Reply::Approve(txid)) => Ok(CallOutcome::Finished(TxReceipt::new(txid.to_owned()))),
            Some(Reply::Cancel) => Ok(CallOutcome::Cancelled),
            Some(Reply::Fail(reason)) => Err(WalletError::Rejected(reason.to_owned())),
            None => Err(WalletError::Unavailable(s!("extension closed"))),
        }
    }

    async fn read_only_query(&self, _query: ReadOnlyQuery) -> Result<ClarityValue, WalletError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(ClarityValue::OptionalNone))
    }
}
