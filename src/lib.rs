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

#![deny(
    unsafe_code,
    dead_code,
    unused_variables,
    unused_mut,
    unused_imports,
    non_upper_case_globals,
    non_camel_case_types,
    non_snake_case
)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Marketplace layer of an NFT auction front-end: turns raw form input into safety-checked
//! contract-call requests for the auction contract, hands them over to a wallet for signing and
//! keeps track of the bid status of the signed-in user.
//!
//! The flow of a single action:
//! - a form ([`ActionForm`]) is validated into typed parameters, converting human STX amounts into
//!   micro-STX ([`MicroStx`]);
//! - [`IntentBuilder`] assembles a [`ContractCallRequest`] according to the action table
//!   ([`ActionKind::spec`]), bounding every transfer with a post-condition;
//! - [`Submitter`] passes the request to a [`WalletConnector`] and awaits the [`CallOutcome`].
//!
//! Read-only bid status queries are issued periodically by a poller ([`watch_bids`]), which
//! publishes the results as a [`BidBoard`].

#[macro_use]
extern crate amplify;
#[macro_use]
extern crate serde;

pub use clarity_callreq::*;

mod amount;
mod forms;
mod actions;
mod config;
mod session;
mod intent;
mod wallet;
mod submit;
mod poll;

pub use actions::{ActionKind, ActionSpec, ArgShape, ConditionShape, Party, ReadKind, Target};
pub use amount::{parse_uint, MicroStx, SCALE, SCALE_DECIMALS};
pub use config::{ConfigError, FunctionNames, MarketConfig, DEFAULT_POLL_INTERVAL};
pub use forms::{
    parse_collection, ActionForm, CreateAuctionForm, CreateAuctionParams, Field, InputError, PlaceBidForm,
    PlaceBidParams, SettleForm, SettleParams, WhitelistForm, WhitelistParams,
};
pub use intent::{IntentBuilder, IntentError};
pub use poll::{spawn_poller, watch_bids, BidBoard, PollHandle, MIN_POLL_PERIOD};
pub use session::{Session, SessionContext, UserProfile};
pub use submit::{SubmitError, SubmitObserver, Submitter};
pub use wallet::{CallOutcome, TxId, TxReceipt, WalletConnector, WalletError};
