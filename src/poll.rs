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

//! Periodic fetching of the bid status of the signed-in user.

use std::sync::Arc;
use std::time::Duration;

use clarity_callreq::ReadOnlyQuery;
use log::{debug, trace, warn};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::{IntentBuilder, IntentError, MicroStx, ReadKind, Session, WalletConnector};

const LOG_TARGET: &str = "nftauction::poll";

/// Shortest period between query rounds; shorter periods are raised to it.
pub const MIN_POLL_PERIOD: Duration = Duration::from_secs(1);

/// Last observed bid status. A value stays unknown until a query reports it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BidBoard {
    /// Total amount the user has bid on the marketplace.
    pub bidder_total: Option<MicroStx>,
    pub highest_bid: Option<MicroStx>,
}

impl BidBoard {
    pub fn get(&self, kind: ReadKind) -> Option<MicroStx> {
        match kind {
            ReadKind::BidderTotal => self.bidder_total,
            ReadKind::HighestBid => self.highest_bid,
        }
    }

    pub fn record(&mut self, kind: ReadKind, amount: MicroStx) {
        match kind {
            ReadKind::BidderTotal => self.bidder_total = Some(amount),
            ReadKind::HighestBid => self.highest_bid = Some(amount),
        }
    }
}

/// Owns a running poller. Stopping or dropping the handle cancels the poller.
#[derive(Debug)]
pub struct PollHandle {
    board: watch::Receiver<BidBoard>,
    shutdown: Option<watch::Sender<bool>>,
    task: Option<JoinHandle<()>>,
}

impl PollHandle {
    pub fn board(&self) -> BidBoard { *self.board.borrow() }

    /// Receiver notified on every board update.
    pub fn subscribe(&self) -> watch::Receiver<BidBoard> { self.board.clone() }

    pub fn is_running(&self) -> bool { self.task.as_ref().is_some_and(|task| !task.is_finished()) }

    /// Cancels the poller and waits for its task to end. No query is issued and the board is not
    /// updated after this returns.
    pub async fn stop(mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(true);
        }
        if let Some(task) = self.task.take() {
            task.abort();
            let _ = task.await;
        }
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(true);
        }
        if let Some(task) = &self.task {
            task.abort();
        }
    }
}

/// Starts issuing the queries every `period`, the first ones right away. A period shorter than
/// [`MIN_POLL_PERIOD`] is raised to it.
///
/// Must be called from within a tokio runtime.
pub fn spawn_poller<W>(wallet: Arc<W>, queries: Vec<(ReadKind, ReadOnlyQuery)>, period: Duration) -> PollHandle
where
    W: WalletConnector + ?Sized + 'static,
{
    if period < MIN_POLL_PERIOD {
        warn!(target: LOG_TARGET, "Poll period {period:?} is too short, using {MIN_POLL_PERIOD:?}");
    }
    let period = period.max(MIN_POLL_PERIOD);
    let (board_tx, board_rx) = watch::channel(BidBoard::default());
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    let task = tokio::spawn(async move {
        let mut interval = time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        'poll: loop {
            tokio::select! {
                biased;
                _ = shutdown_rx.changed() => break 'poll,
                _ = interval.tick() => {}
            }
            for (kind, query) in &queries {
                let result = wallet.read_only_query(query.clone()).await;
                if *shutdown_rx.borrow() {
                    break 'poll;
                }
                match result {
                    Ok(value) => match value.amount() {
                        Some(amount) => {
                            trace!(target: LOG_TARGET, "{kind} is {value}");
                            board_tx.send_modify(|board| board.record(*kind, MicroStx::from(amount)));
                        }
                        None => debug!(target: LOG_TARGET, "{kind} query returned {value}, keeping the last value"),
                    },
                    Err(err) => warn!(target: LOG_TARGET, "Unable to fetch {kind}: {err}"),
                }
            }
        }
        debug!(target: LOG_TARGET, "Bid status polling stopped");
    });

    PollHandle { board: board_rx, shutdown: Some(shutdown_tx), task: Some(task) }
}

/// Polls the bid status of the signed-in user at the configured interval.
pub fn watch_bids<W>(
    builder: &IntentBuilder<'_>,
    session: &impl Session,
    wallet: Arc<W>,
) -> Result<PollHandle, IntentError>
where
    W: WalletConnector + ?Sized + 'static,
{
    let queries = builder.queries(session)?;
    Ok(spawn_poller(wallet, queries, builder.config().poll_period()))
}
