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

use core::fmt::{self, Display, Formatter};
use core::str::FromStr;

use crate::{
    ClarityName, ClarityValue, ContractPrincipal, PostCondition, PostConditionMode, StandardPrincipal,
};

/// Chain environment a request targets.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(try_from = "String", into = "String"))]
pub enum Network {
    /// Local development chain.
    #[default]
    #[display("mocknet")]
    Mocknet,

    #[display("testnet")]
    Testnet,

    #[display("mainnet")]
    Mainnet,
}

impl Network {
    pub fn is_mainnet(self) -> bool { self == Self::Mainnet }

    /// Whether accounts of the given address version live on this network.
    pub fn admits(self, address: &StandardPrincipal) -> bool { address.is_mainnet() == self.is_mainnet() }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mocknet" | "devnet" => Ok(Self::Mocknet),
            "testnet" => Ok(Self::Testnet),
            "mainnet" => Ok(Self::Mainnet),
            _ => Err(format!("unknown network '{s}'")),
        }
    }
}

impl TryFrom<String> for Network {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> { Self::from_str(&value) }
}

impl From<Network> for String {
    fn from(value: Network) -> Self { value.to_string() }
}

/// Whether a transaction may be included into an anchored block, a microblock, or both.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "kebab-case"))]
pub enum AnchorMode {
    #[display("on-chain-only")]
    OnChainOnly,

    #[display("off-chain-only")]
    OffChainOnly,

    #[default]
    #[display("any")]
    Any,
}

/// Application identity shown by the wallet when it asks the user to approve a request.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AppDetails {
    pub name: String,
    pub icon: String,
}

/// Request to sign and broadcast a transaction invoking a public contract function.
///
/// Neither the function name nor the arguments are checked against the contract interface: a
/// mismatch produces a transaction which fails on-chain.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "camelCase"))]
pub struct ContractCallRequest {
    pub contract: ContractPrincipal,
    pub function: ClarityName,
    pub args: Vec<ClarityValue>,
    pub post_condition_mode: PostConditionMode,
    pub post_conditions: Vec<PostCondition>,
    pub network: Network,
    pub anchor_mode: AnchorMode,
    pub app: Option<AppDetails>,
}

impl ContractCallRequest {
    pub fn fungible_conditions(&self) -> impl Iterator<Item = &PostCondition> {
        self.post_conditions.iter().filter(|pc| pc.is_fungible())
    }

    pub fn non_fungible_conditions(&self) -> impl Iterator<Item = &PostCondition> {
        self.post_conditions.iter().filter(|pc| pc.is_non_fungible())
    }
}

impl Display for ContractCallRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_call(f, &self.contract, &self.function, &self.args)
    }
}

/// Side-effect-free call of a read-only contract function; requires no signing.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "camelCase"))]
pub struct ReadOnlyQuery {
    pub contract: ContractPrincipal,
    pub function: ClarityName,
    pub args: Vec<ClarityValue>,
    pub sender: StandardPrincipal,
    pub network: Network,
}

impl Display for ReadOnlyQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { write_call(f, &self.contract, &self.function, &self.args) }
}

fn write_call(
    f: &mut Formatter<'_>,
    contract: &ContractPrincipal,
    function: &ClarityName,
    args: &[ClarityValue],
) -> fmt::Result {
    write!(f, "(contract-call? '{contract} {function}")?;
    for arg in args {
        write!(f, " {arg}")?;
    }
    f.write_str(")")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn networks() {
        assert_eq!(Network::from_str("devnet"), Ok(Network::Mocknet));
        assert_eq!(Network::from_str("Mainnet"), Ok(Network::Mainnet));
        assert!(Network::from_str("regtest").is_err());
        assert_eq!(Network::Testnet.to_string(), "testnet");

        let testnet_addr = StandardPrincipal::from_str("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM").unwrap();
        let mainnet_addr = StandardPrincipal::from_str("SP2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9EJ7").unwrap();
        assert!(Network::Mocknet.admits(&testnet_addr));
        assert!(Network::Testnet.admits(&testnet_addr));
        assert!(!Network::Mainnet.admits(&testnet_addr));
        assert!(Network::Mainnet.admits(&mainnet_addr));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn request_yaml() {
        use crate::{AssetInfo, FungibleConditionCode, NonFungibleConditionCode};

        let contract = ContractPrincipal::from_str("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM.auction").unwrap();
        let nft = ContractPrincipal::from_str("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM.sip009").unwrap();
        let caller = StandardPrincipal::from_str("ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG").unwrap();
        let asset = AssetInfo::new(nft.clone(), ClarityName::from_static("auctionnfts"));
        let request = ContractCallRequest::new(contract, ClarityName::from_static("place-a-bid"), Network::Testnet)
            .push_arg(ClarityValue::contract_principal(nft))
            .push_arg(ClarityValue::tuple([
                (ClarityName::from_static("token-id"), ClarityValue::uint(3u8)),
                (ClarityName::from_static("bid-amount"), ClarityValue::uint(5_000_000u32)),
                (ClarityName::from_static("auction-id"), ClarityValue::uint(7u8)),
            ]))
            .add_post_condition(PostCondition::stx(caller.clone(), FungibleConditionCode::LessEqual, 5_000_000))
            .add_post_condition(PostCondition::nft(
                caller,
                asset,
                ClarityValue::uint(3u8),
                NonFungibleConditionCode::Sends,
            ))
            .use_app(AppDetails { name: s!("Auction"), icon: s!("https://example.com/icon.svg") });

        let yaml = serde_yaml::to_string(&request).unwrap();
        assert!(yaml.contains("network: testnet"));
        assert!(yaml.contains("postConditionMode: deny"));
        assert!(yaml.find("token-id") < yaml.find("bid-amount"));
        assert_eq!(serde_yaml::from_str::<ContractCallRequest>(&yaml).unwrap(), request);
    }
}
