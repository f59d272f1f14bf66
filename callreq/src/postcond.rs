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

use crate::{ClarityName, ClarityValue, ContractPrincipal, Principal};

/// Comparison applied by a fungible post-condition to the amount actually transferred.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "kebab-case"))]
pub enum FungibleConditionCode {
    #[display("==")]
    Equal,

    #[display(">")]
    Greater,

    #[display(">=")]
    GreaterEqual,

    #[display("<")]
    Less,

    #[display("<=")]
    LessEqual,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "kebab-case"))]
pub enum NonFungibleConditionCode {
    #[display("sends")]
    Sends,

    #[display("does-not-send")]
    DoesNotSend,
}

/// Whether a transaction may transfer assets not mentioned in its post-conditions.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "kebab-case"))]
pub enum PostConditionMode {
    #[display("allow")]
    Allow,

    #[default]
    #[display("deny")]
    Deny,
}

/// Asset class defined by a contract: `ADDRESS.contract-name::asset-name`.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Display)]
#[display("{contract}::{asset_name}")]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "camelCase"))]
pub struct AssetInfo {
    pub contract: ContractPrincipal,
    pub asset_name: ClarityName,
}

impl AssetInfo {
    pub fn new(contract: ContractPrincipal, asset_name: ClarityName) -> Self { Self { contract, asset_name } }
}

/// Assertion on the assets a principal transfers within a transaction. The chain aborts the whole
/// transaction if any of its post-conditions does not hold.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "kebab-case"))]
pub enum PostCondition {
    /// Bounds the amount of micro-STX sent by the principal.
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    Stx { principal: Principal, code: FungibleConditionCode, amount: u128 },

    /// Asserts whether the principal sends a specific non-fungible token.
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    NonFungible { principal: Principal, asset: AssetInfo, asset_value: ClarityValue, code: NonFungibleConditionCode },
}

impl PostCondition {
    pub fn stx(principal: impl Into<Principal>, code: FungibleConditionCode, amount: u128) -> Self {
        Self::Stx { principal: principal.into(), code, amount }
    }

    pub fn nft(
        principal: impl Into<Principal>,
        asset: AssetInfo,
        asset_value: ClarityValue,
        code: NonFungibleConditionCode,
    ) -> Self {
        Self::NonFungible { principal: principal.into(), asset, asset_value, code }
    }

    pub fn principal(&self) -> &Principal {
        match self {
            Self::Stx { principal, .. } | Self::NonFungible { principal, .. } => principal,
        }
    }

    /// Amount bound of an STX condition; `None` for non-fungible ones.
    pub fn amount(&self) -> Option<u128> {
        match self {
            Self::Stx { amount, .. } => Some(*amount),
            Self::NonFungible { .. } => None,
        }
    }

    pub fn is_fungible(&self) -> bool { !self.is_non_fungible() }

    pub fn is_non_fungible(&self) -> bool { matches!(self, Self::NonFungible { .. }) }
}

impl core::fmt::Display for PostCondition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Stx { principal, code, amount } => write!(f, "'{principal} sends {code} {amount} uSTX"),
            Self::NonFungible { principal, asset, asset_value, code } => {
                write!(f, "'{principal} {code} {asset} {asset_value}")
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display() {
        let caller: Principal = "ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG".parse().unwrap();
        let stx = PostCondition::stx(caller.clone(), FungibleConditionCode::LessEqual, 5_000_000);
        assert_eq!(stx.to_string(), "'ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG sends <= 5000000 uSTX");
        assert_eq!(stx.amount(), Some(5_000_000));
        assert!(stx.is_fungible());

        let asset = AssetInfo::new(
            "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM.sip009".parse().unwrap(),
            ClarityName::from_static("auctionnfts"),
        );
        let nft = PostCondition::nft(caller, asset, ClarityValue::uint(3u8), NonFungibleConditionCode::Sends);
        assert_eq!(
            nft.to_string(),
            "'ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG sends ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM.sip009::auctionnfts \
             u3"
        );
        assert_eq!(nft.amount(), None);
        assert!(nft.is_non_fungible());
    }
}
