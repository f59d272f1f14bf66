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

//! Raw values of the marketplace forms and their validation into typed action parameters.
//!
//! Forms hold exactly what a user typed in; nothing reaches a contract-call request before it
//! passes validation here.

use clarity_callreq::{ContractPrincipal, Network, PrincipalError, StandardPrincipal};

use crate::amount::parse_uint;
use crate::{ActionKind, MarketConfig, MicroStx};

/// Form field, named the way the user sees it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display)]
pub enum Field {
    #[display("asset id")]
    AssetId,

    #[display("token id")]
    TokenId,

    #[display("start price")]
    StartPrice,

    #[display("duration")]
    Duration,

    #[display("bid amount")]
    BidAmount,

    #[display("auction id")]
    AuctionId,
}

#[derive(Clone, Eq, PartialEq, Debug, Display, Error)]
#[display(doc_comments)]
pub enum InputError {
    /// {0} is required.
    Missing(Field),

    /// {0} must be a number, while '{1}' was given.
    NotNumeric(Field, String),

    /// {0} can't be negative.
    Negative(Field),

    /// {0} can't have more than 6 decimal places.
    TooPrecise(Field),

    /// {0} is too large.
    OutOfRange(Field),

    /// {0} is not a valid principal - {1}
    Principal(Field, PrincipalError),

    /// {0} '{1}' does not belong to {2}.
    WrongNetwork(Field, String, Network),
}

/// Parses an asset id field: either an account address, in which case the configured collection
/// contract name is assumed, or a full `ADDRESS.contract-name` contract principal.
pub fn parse_collection(config: &MarketConfig, input: &str) -> Result<ContractPrincipal, InputError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(InputError::Missing(Field::AssetId));
    }
    let collection = if s.contains('.') {
        s.parse::<ContractPrincipal>()
    } else {
        s.parse::<StandardPrincipal>()
            .map(|address| config.collection_at(address))
    }
    .map_err(|err| InputError::Principal(Field::AssetId, err))?;
    if !config.network.admits(&collection.address) {
        return Err(InputError::WrongNetwork(Field::AssetId, collection.to_string(), config.network));
    }
    Ok(collection)
}

#[derive(Clone, Eq, PartialEq, Debug, Default)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct WhitelistForm {
    pub asset_id: String,
}

#[derive(Clone, Eq, PartialEq, Debug, Default)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct CreateAuctionForm {
    pub asset_id: String,
    pub token_id: String,
    pub start_price: String,
    pub duration: String,
}

#[derive(Clone, Eq, PartialEq, Debug, Default)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PlaceBidForm {
    pub asset_id: String,
    pub bid_amount: String,
    pub token_id: String,
    pub auction_id: String,
}

/// Form shared by the win claim and refund request actions.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SettleForm {
    pub asset_id: String,
    pub auction_id: String,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct WhitelistParams {
    pub collection: ContractPrincipal,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct CreateAuctionParams {
    pub collection: ContractPrincipal,
    pub token_id: u128,
    pub start_price: MicroStx,
    /// Number of blocks the auction stays open.
    pub duration: u128,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct PlaceBidParams {
    pub collection: ContractPrincipal,
    pub token_id: u128,
    pub bid: MicroStx,
    pub auction_id: u128,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct SettleParams {
    pub collection: ContractPrincipal,
    pub auction_id: u128,
}

impl WhitelistForm {
    pub fn validate(&self, config: &MarketConfig) -> Result<WhitelistParams, InputError> {
        Ok(WhitelistParams { collection: parse_collection(config, &self.asset_id)? })
    }
}

impl CreateAuctionForm {
    pub fn validate(&self, config: &MarketConfig) -> Result<CreateAuctionParams, InputError> {
        Ok(CreateAuctionParams {
            collection: parse_collection(config, &self.asset_id)?,
            token_id: parse_uint(Field::TokenId, &self.token_id)?,
            start_price: MicroStx::parse_stx(Field::StartPrice, &self.start_price)?,
            duration: parse_uint(Field::Duration, &self.duration)?,
        })
    }
}

impl PlaceBidForm {
    pub fn validate(&self, config: &MarketConfig) -> Result<PlaceBidParams, InputError> {
        Ok(PlaceBidParams {
            collection: parse_collection(config, &self.asset_id)?,
            bid: MicroStx::parse_stx(Field::BidAmount, &self.bid_amount)?,
            token_id: parse_uint(Field::TokenId, &self.token_id)?,
            auction_id: parse_uint(Field::AuctionId, &self.auction_id)?,
        })
    }
}

impl SettleForm {
    pub fn validate(&self, config: &MarketConfig) -> Result<SettleParams, InputError> {
        Ok(SettleParams {
            collection: parse_collection(config, &self.asset_id)?,
            auction_id: parse_uint(Field::AuctionId, &self.auction_id)?,
        })
    }
}

/// Filled-in form of any marketplace action.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ActionForm {
    Whitelist(WhitelistForm),
    CreateAuction(CreateAuctionForm),
    PlaceBid(PlaceBidForm),
    ClaimWin(SettleForm),
    RequestRefund(SettleForm),
    Mint,
}

impl ActionForm {
    pub fn kind(&self) -> ActionKind {
        match self {
            ActionForm::Whitelist(_) => ActionKind::Whitelist,
            ActionForm::CreateAuction(_) => ActionKind::CreateAuction,
            ActionForm::PlaceBid(_) => ActionKind::PlaceBid,
            ActionForm::ClaimWin(_) => ActionKind::ClaimWin,
            ActionForm::RequestRefund(_) => ActionKind::RequestRefund,
            ActionForm::Mint => ActionKind::Mint,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const DEPLOYER: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";

    fn config() -> MarketConfig { MarketConfig::new(Network::Mocknet, format!("{DEPLOYER}.auction").parse().unwrap()) }

    #[test]
    fn collection_defaults() {
        let config = config();
        let collection = parse_collection(&config, DEPLOYER).unwrap();
        assert_eq!(collection.to_string(), format!("{DEPLOYER}.sip009"));

        let explicit = parse_collection(&config, &format!("{DEPLOYER}.punks")).unwrap();
        assert_eq!(explicit.name.as_str(), "punks");

        assert_eq!(parse_collection(&config, "  "), Err(InputError::Missing(Field::AssetId)));
        assert!(matches!(parse_collection(&config, "nft"), Err(InputError::Principal(Field::AssetId, _))));
        assert!(matches!(
            parse_collection(&config, "SP2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9EJ7"),
            Err(InputError::WrongNetwork(Field::AssetId, _, Network::Mocknet))
        ));
    }

    #[test]
    fn create_auction_form() {
        let form = CreateAuctionForm {
            asset_id: DEPLOYER.to_owned(),
            token_id: s!("1"),
            start_price: s!("50"),
            duration: s!("144"),
        };
        let params = form.validate(&config()).unwrap();
        assert_eq!(params.token_id, 1);
        assert_eq!(params.start_price, MicroStx::from_stx(50));
        assert_eq!(params.duration, 144);

        let missing_token = CreateAuctionForm { token_id: none!(), ..form.clone() };
        assert_eq!(missing_token.validate(&config()), Err(InputError::Missing(Field::TokenId)));

        let bad_price = CreateAuctionForm { start_price: s!("lots"), ..form };
        assert_eq!(bad_price.validate(&config()), Err(InputError::NotNumeric(Field::StartPrice, s!("lots"))));
    }

    #[test]
    fn place_bid_form() {
        let form = PlaceBidForm {
            asset_id: DEPLOYER.to_owned(),
            bid_amount: s!("2.5"),
            token_id: s!("3"),
            auction_id: s!("-7"),
        };
        assert_eq!(form.validate(&config()), Err(InputError::Negative(Field::AuctionId)));
        let form = PlaceBidForm { auction_id: s!("7"), ..form };
        assert_eq!(form.validate(&config()).unwrap().bid, MicroStx::from(2_500_000));
    }

    #[test]
    fn form_kinds() {
        assert_eq!(ActionForm::ClaimWin(none!()).kind(), ActionKind::ClaimWin);
        assert_eq!(ActionForm::RequestRefund(none!()).kind(), ActionKind::RequestRefund);
        assert_eq!(ActionForm::Mint.kind(), ActionKind::Mint);
    }
}
