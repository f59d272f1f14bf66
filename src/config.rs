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

use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

use clarity_callreq::{AppDetails, AssetInfo, ClarityName, ContractName, ContractPrincipal, Network, StandardPrincipal};

use crate::{ActionKind, ReadKind};

pub const DEFAULT_POLL_INTERVAL: u64 = 10;

/// Deployment the marketplace front-end works with.
#[derive(Clone, Eq, PartialEq, Debug)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MarketConfig {
    #[serde(default)]
    pub network: Network,

    /// Auction marketplace contract.
    pub marketplace: ContractPrincipal,

    /// Contract name assumed for an asset id given as a bare account address.
    #[serde(default = "MarketConfig::default_collection_name")]
    pub collection_name: ContractName,

    /// Name of the NFT asset class defined by collection contracts.
    #[serde(default = "MarketConfig::default_asset_name")]
    pub asset_name: ClarityName,

    /// Collection contract minted into; defaults to the collection deployed next to the marketplace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mint_collection: Option<ContractPrincipal>,

    /// Interval between bid status queries, in seconds.
    #[serde(default = "MarketConfig::default_poll_interval")]
    pub poll_interval: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app: Option<AppDetails>,

    #[serde(default)]
    pub functions: FunctionNames,
}

impl MarketConfig {
    fn default_collection_name() -> ContractName { ContractName::from_static("sip009") }

    fn default_asset_name() -> ClarityName { ClarityName::from_static("auctionnfts") }

    fn default_poll_interval() -> u64 { DEFAULT_POLL_INTERVAL }

    pub fn new(network: Network, marketplace: ContractPrincipal) -> Self {
        Self {
            network,
            marketplace,
            collection_name: Self::default_collection_name(),
            asset_name: Self::default_asset_name(),
            mint_collection: None,
            poll_interval: DEFAULT_POLL_INTERVAL,
            app: None,
            functions: none!(),
        }
    }

    /// Collection contract deployed by `address` under the configured collection name.
    pub fn collection_at(&self, address: StandardPrincipal) -> ContractPrincipal {
        ContractPrincipal::new(address, self.collection_name.clone())
    }

    pub fn asset_info(&self, collection: &ContractPrincipal) -> AssetInfo {
        AssetInfo::new(collection.clone(), self.asset_name.clone())
    }

    pub fn mint_target(&self) -> ContractPrincipal {
        self.mint_collection
            .clone()
            .unwrap_or_else(|| self.collection_at(self.marketplace.address.clone()))
    }

    pub fn poll_period(&self) -> Duration { Duration::from_secs(self.poll_interval) }

    /// Checks that every configured contract lives on the configured network.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for contract in [Some(&self.marketplace), self.mint_collection.as_ref()]
            .into_iter()
            .flatten()
        {
            if !self.network.admits(&contract.address) {
                return Err(ConfigError::WrongNetwork(contract.clone(), self.network));
            }
        }
        if self.poll_interval == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }
        Ok(())
    }

    /// Reads configuration from a `.toml`, `.yaml` or `.yml` file, validating it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)?;
        let config: Self = match Format::of(path)? {
            Format::Toml => toml::from_str(&data)?,
            Format::Yaml => serde_yaml::from_str(&data)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let data = match Format::of(path)? {
            Format::Toml => toml::to_string(self)?,
            Format::Yaml => serde_yaml::to_string(self)?,
        };
        fs::write(path, data)?;
        Ok(())
    }
}

enum Format {
    Toml,
    Yaml,
}

impl Format {
    fn of(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Format::Toml),
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            _ => Err(ConfigError::Format(path.display().to_string())),
        }
    }
}

/// Names of the contract functions the marketplace actions invoke.
#[derive(Clone, Eq, PartialEq, Debug)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct FunctionNames {
    pub whitelist: ClarityName,
    pub create_auction: ClarityName,
    pub place_bid: ClarityName,
    pub claim_win: ClarityName,
    pub request_refund: ClarityName,
    pub mint: ClarityName,
    pub bidder_total: ClarityName,
    pub highest_bid: ClarityName,
}

impl Default for FunctionNames {
    fn default() -> Self {
        Self {
            whitelist: ClarityName::from_static("set-whitelisted"),
            create_auction: ClarityName::from_static("create-auction"),
            place_bid: ClarityName::from_static("place-a-bid"),
            claim_win: ClarityName::from_static("settle-auction"),
            request_refund: ClarityName::from_static("request-refund"),
            mint: ClarityName::from_static("mint"),
            bidder_total: ClarityName::from_static("get-biders-total-bid"),
            highest_bid: ClarityName::from_static("get-highest-bid-amount"),
        }
    }
}

impl FunctionNames {
    pub fn get(&self, kind: ActionKind) -> &ClarityName {
        match kind {
            ActionKind::Whitelist => &self.whitelist,
            ActionKind::CreateAuction => &self.create_auction,
            ActionKind::PlaceBid => &self.place_bid,
            ActionKind::ClaimWin => &self.claim_win,
            ActionKind::RequestRefund => &self.request_refund,
            ActionKind::Mint => &self.mint,
        }
    }

    pub fn read(&self, kind: ReadKind) -> &ClarityName {
        match kind {
            ReadKind::BidderTotal => &self.bidder_total,
            ReadKind::HighestBid => &self.highest_bid,
        }
    }
}

#[derive(Debug, Display, Error, From)]
#[display(inner)]
pub enum ConfigError {
    #[from]
    Io(io::Error),

    #[from]
    TomlDecode(toml::de::Error),

    #[from]
    TomlEncode(toml::ser::Error),

    #[from]
    Yaml(serde_yaml::Error),

    #[display("unsupported configuration file format of '{0}'; use .toml, .yaml or .yml")]
    Format(String),

    #[display("contract {0} is not deployed on {1}")]
    WrongNetwork(ContractPrincipal, Network),

    #[display("poll interval must be positive")]
    ZeroPollInterval,
}
