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

//! Submission of contract calls to the wallet, one at a time.

use std::sync::atomic::{AtomicBool, Ordering};

use clarity_callreq::ContractCallRequest;
use log::{debug, info, warn};

use crate::{ActionForm, ActionKind, BidBoard, CallOutcome, IntentBuilder, IntentError, Session, TxReceipt};
use crate::{WalletConnector, WalletError};

const LOG_TARGET: &str = "nftauction::submit";

/// Receives submission results, in place of wallet callbacks.
pub trait SubmitObserver: Send + Sync {
    fn on_finish(&self, _kind: ActionKind, _receipt: &TxReceipt) {}

    fn on_cancel(&self, _kind: ActionKind) {}
}

impl SubmitObserver for () {}

#[derive(Clone, Eq, PartialEq, Debug, Display, Error, From)]
#[display(inner)]
pub enum SubmitError {
    #[display("another submission is waiting for the wallet approval")]
    InFlight,

    #[from]
    Intent(IntentError),

    #[from]
    Wallet(WalletError),
}

/// Hands requests to the wallet, refusing a new one until the wallet answers the previous.
///
/// Nothing is retried: a cancelled or failed submission needs a new user action.
#[derive(Debug)]
pub struct Submitter<W: WalletConnector, O: SubmitObserver = ()> {
    wallet: W,
    observer: O,
    busy: AtomicBool,
}

impl<W: WalletConnector> Submitter<W> {
    pub fn new(wallet: W) -> Self { Self { wallet, observer: (), busy: AtomicBool::new(false) } }
}

impl<W: WalletConnector, O: SubmitObserver> Submitter<W, O> {
    pub fn with_observer(wallet: W, observer: O) -> Self { Self { wallet, observer, busy: AtomicBool::new(false) } }

    /// Whether a submission awaits the wallet; the submit action should be disabled meanwhile.
    pub fn is_busy(&self) -> bool { self.busy.load(Ordering::Acquire) }

    pub fn wallet(&self) -> &W { &self.wallet }

    pub fn observer(&self) -> &O { &self.observer }

    pub async fn submit(&self, kind: ActionKind, request: ContractCallRequest) -> Result<CallOutcome, SubmitError> {
        let _guard = BusyGuard::acquire(&self.busy).ok_or(SubmitError::InFlight)?;

        debug!(target: LOG_TARGET, "Requesting approval of {kind}: {request}");
        match self.wallet.contract_call(request).await {
            Ok(CallOutcome::Finished(receipt)) => {
                info!(target: LOG_TARGET, "Transaction {} broadcast for {kind}. {}", receipt.txid, kind.notice());
                if let Some(raw_tx) = &receipt.raw_tx {
                    debug!(target: LOG_TARGET, "Raw transaction {}: {raw_tx}", receipt.txid);
                }
                self.observer.on_finish(kind, &receipt);
                Ok(CallOutcome::Finished(receipt))
            }
            Ok(CallOutcome::Cancelled) => {
                info!(target: LOG_TARGET, "User cancelled {kind}");
                self.observer.on_cancel(kind);
                Ok(CallOutcome::Cancelled)
            }
            Err(err) => {
                warn!(target: LOG_TARGET, "Wallet failed to process {kind}: {err}");
                Err(err.into())
            }
        }
    }

    /// Validates and builds the form request, then submits it. Invalid input never reaches the
    /// wallet.
    pub async fn submit_form(
        &self,
        builder: &IntentBuilder<'_>,
        session: &impl Session,
        form: &ActionForm,
        board: &BidBoard,
    ) -> Result<CallOutcome, SubmitError> {
        let request = builder.build(session, form, board).inspect_err(|err| {
            debug!(target: LOG_TARGET, "Rejected {} input: {err}", form.kind());
        })?;
        self.submit(form.kind(), request).await
    }
}

struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) { self.0.store(false, Ordering::Release); }
}
