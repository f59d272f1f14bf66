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

use crate::{
    AnchorMode, AppDetails, ClarityName, ClarityValue, ContractCallRequest, ContractPrincipal, Network, PostCondition,
    PostConditionMode, ReadOnlyQuery, StandardPrincipal,
};

impl ContractCallRequest {
    /// Constructs a request without arguments and post-conditions, denying any transfer not covered
    /// by post-conditions added later.
    pub fn new(contract: ContractPrincipal, function: ClarityName, network: Network) -> Self {
        Self {
            contract,
            function,
            args: vec![],
            post_condition_mode: PostConditionMode::Deny,
            post_conditions: vec![],
            network,
            anchor_mode: AnchorMode::Any,
            app: None,
        }
    }

    pub fn push_arg(mut self, arg: impl Into<ClarityValue>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn with_args(mut self, args: impl IntoIterator<Item = ClarityValue>) -> Self {
        self.args.extend(args);
        self
    }

    pub fn add_post_condition(mut self, condition: PostCondition) -> Self {
        self.post_conditions.push(condition);
        self
    }

    pub fn use_post_condition_mode(mut self, mode: PostConditionMode) -> Self {
        self.post_condition_mode = mode;
        self
    }

    pub fn use_app(mut self, app: AppDetails) -> Self {
        self.app = Some(app);
        self
    }
}

impl ReadOnlyQuery {
    pub fn new(contract: ContractPrincipal, function: ClarityName, sender: StandardPrincipal, network: Network) -> Self {
        Self { contract, function, args: vec![], sender, network }
    }

    pub fn push_arg(mut self, arg: impl Into<ClarityValue>) -> Self {
        self.args.push(arg.into());
        self
    }
}
