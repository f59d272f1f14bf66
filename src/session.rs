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

use clarity_callreq::StandardPrincipal;

/// Wallet connection state, as exposed by the wallet SDK. Read-only for the marketplace.
pub trait Session {
    fn current_principal(&self) -> Option<&StandardPrincipal>;

    fn is_signed_in(&self) -> bool { self.current_principal().is_some() }
}

#[derive(Clone, Eq, PartialEq, Debug, Default)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Snapshot of a wallet session.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct SessionContext {
    principal: Option<StandardPrincipal>,
    profile: UserProfile,
}

impl SessionContext {
    pub fn signed_out() -> Self { none!() }

    pub fn signed_in(principal: StandardPrincipal) -> Self { Self { principal: Some(principal), profile: none!() } }

    pub fn with_profile(mut self, profile: UserProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn profile(&self) -> &UserProfile { &self.profile }
}

impl Session for SessionContext {
    fn current_principal(&self) -> Option<&StandardPrincipal> { self.principal.as_ref() }
}

impl<S: Session> Session for &S {
    fn current_principal(&self) -> Option<&StandardPrincipal> { (*self).current_principal() }
}
