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

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
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

//! _Contract call request_ is a specification on constructing a transaction invoking a public
//! function of a Clarity contract, which is handed over to a wallet for signing and broadcasting.
//!
//! The crate provides the data model shared by wallets and the applications preparing the calls:
//! - [`ClarityValue`]s used as function arguments and returned by read-only functions;
//! - [`StandardPrincipal`]s, [`ContractPrincipal`]s and validated [`ClarityName`]s;
//! - [`PostCondition`]s, which bound the asset transfers a transaction is allowed to perform;
//! - [`ContractCallRequest`] and [`ReadOnlyQuery`] themselves.
//!
//! # Clarity representation
//!
//! Requests and values display in Clarity syntax, which is what gets logged and printed:
//!
//! ```text
//! (contract-call? 'ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM.auction place-a-bid
//!     'ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM.sip009
//!     (tuple (token-id u3) (bid-amount u5000000) (auction-id u7)))
//! ```

#[macro_use]
extern crate amplify;

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

mod name;
mod principal;
mod value;
mod postcond;
mod data;
mod builder;

pub use data::{AnchorMode, AppDetails, ContractCallRequest, Network, ReadOnlyQuery};
pub use name::{ClarityName, ContractName, NameError, CLARITY_NAME_MAX_LEN, CONTRACT_NAME_MAX_LEN};
pub use postcond::{AssetInfo, FungibleConditionCode, NonFungibleConditionCode, PostCondition, PostConditionMode};
pub use principal::{AddressVersion, ContractPrincipal, Principal, PrincipalError, StandardPrincipal, C32_ALPHABET};
pub use value::{ClarityValue, TupleData};
