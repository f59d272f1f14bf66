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

#[macro_use]
extern crate amplify;

mod common;

use common::{bidder, config, BIDDER, DEPLOYER};
use nftauction::{
    ActionForm, ActionKind, BidBoard, ClarityName, ClarityValue, ContractPrincipal, CreateAuctionForm, Field,
    FungibleConditionCode, InputError, IntentBuilder, IntentError, MarketConfig, MicroStx, Network,
    NonFungibleConditionCode, PlaceBidForm, PostCondition, PostConditionMode, Principal, PrincipalError,
    SessionContext, SettleForm,
    WhitelistForm, SCALE,
};

const SP_MARKET: &str = "SP2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9EJ7";
const SP_BIDDER: &str = "SP3FBR2AGK5H9QBDH3EEN6DF8EK8JY7RX8QJ5SVTE";

fn mainnet() -> MarketConfig { MarketConfig::new(Network::Mainnet, format!("{SP_MARKET}.auction").parse().unwrap()) }

fn place_bid(asset_id: &str, token_id: &str, bid_amount: &str, auction_id: &str) -> ActionForm {
    ActionForm::PlaceBid(PlaceBidForm {
        asset_id: asset_id.to_owned(),
        bid_amount: bid_amount.to_owned(),
        token_id: token_id.to_owned(),
        auction_id: auction_id.to_owned(),
    })
}

fn create_auction(token_id: &str, start_price: &str) -> ActionForm {
    ActionForm::CreateAuction(CreateAuctionForm {
        asset_id: DEPLOYER.to_owned(),
        token_id: token_id.to_owned(),
        start_price: start_price.to_owned(),
        duration: s!("144"),
    })
}

#[test]
fn amounts_scale_identically() {
    let config = config();
    let builder = IntentBuilder::new(&config);
    for (human, base) in [("0.000001", 1u128), ("1", SCALE), ("5", 5 * SCALE), ("2.5", 2_500_000), ("1234.567891", 1_234_567_891)]
    {
        let request = builder
            .build(&bidder(), &place_bid(DEPLOYER, "1", human, "1"), &none!())
            .unwrap();
        let arg = request.args[1].field("bid-amount").and_then(ClarityValue::as_uint);
        assert_eq!(arg, Some(base));
        assert_eq!(request.post_conditions.len(), 1);
        assert_eq!(request.post_conditions[0].amount(), Some(base));

        let request = builder.build(&bidder(), &create_auction("1", human), &none!()).unwrap();
        let arg = request.args[1].field("start-price").and_then(ClarityValue::as_uint);
        assert_eq!(arg, Some(base));
    }
}

#[test]
fn create_auction_caller_sends_token() {
    let config = config();
    let request = IntentBuilder::new(&config)
        .build(&bidder(), &create_auction("12", "50"), &none!())
        .unwrap();

    assert_eq!(request.function.as_str(), "create-auction");
    assert_eq!(request.post_condition_mode, PostConditionMode::Deny);
    assert_eq!(request.fungible_conditions().count(), 0);
    let conditions = request.non_fungible_conditions().collect::<Vec<_>>();
    assert_eq!(conditions.len(), 1);
    let PostCondition::NonFungible { principal, asset, asset_value, code } = conditions[0] else {
        panic!("non-fungible condition expected");
    };
    assert_eq!(principal, &Principal::Standard(BIDDER.parse().unwrap()));
    assert_eq!(*code, NonFungibleConditionCode::Sends);
    assert_eq!(asset.to_string(), format!("{DEPLOYER}.sip009::auctionnfts"));
    assert_eq!(*asset_value, ClarityValue::uint(12u8));
    assert_eq!(
        request.to_string(),
        format!(
            "(contract-call? '{DEPLOYER}.auction create-auction '{DEPLOYER}.sip009 (tuple (token-id u12) (start-price \
             u50000000) (expiry u144)))"
        )
    );
}

#[test]
fn claim_win_bounds_both_transfers() {
    let config = config();
    let board = BidBoard { highest_bid: Some(MicroStx::from_stx(8)), ..none!() };
    let form = ActionForm::ClaimWin(SettleForm { asset_id: DEPLOYER.to_owned(), auction_id: s!("4") });
    let request = IntentBuilder::new(&config).build(&bidder(), &form, &board).unwrap();

    assert_eq!(request.function.as_str(), "settle-auction");
    assert_eq!(request.args, vec![
        ClarityValue::contract_principal(format!("{DEPLOYER}.sip009").parse().unwrap()),
        ClarityValue::uint(4u8)
    ]);
    let marketplace = Principal::Contract(config.marketplace.clone());
    assert!(request.post_conditions.iter().any(|pc| matches!(
        pc,
        PostCondition::NonFungible { principal, code: NonFungibleConditionCode::Sends, .. } if *principal == marketplace
    )));
    assert!(request.post_conditions.contains(&PostCondition::stx(
        marketplace.clone(),
        FungibleConditionCode::LessEqual,
        8 * SCALE
    )));
}

#[test]
fn refund_bounded_by_bidder_total() {
    let config = config();
    let builder = IntentBuilder::new(&config);
    let form = ActionForm::RequestRefund(SettleForm { asset_id: DEPLOYER.to_owned(), auction_id: s!("4") });
    assert_eq!(
        builder.build(&bidder(), &form, &BidBoard { highest_bid: Some(MicroStx::from_stx(8)), ..none!() }),
        Err(IntentError::UnknownAmount(ActionKind::RequestRefund))
    );

    let board = BidBoard { bidder_total: Some(MicroStx::from(2_500_000)), highest_bid: Some(MicroStx::from_stx(8)) };
    let request = builder.build(&bidder(), &form, &board).unwrap();
    assert_eq!(request.function.as_str(), "request-refund");
    assert_eq!(request.args, vec![
        ClarityValue::contract_principal(format!("{DEPLOYER}.sip009").parse().unwrap()),
        ClarityValue::uint(4u8)
    ]);
    assert_eq!(request.post_conditions, vec![PostCondition::stx(
        Principal::Contract(config.marketplace.clone()),
        FungibleConditionCode::LessEqual,
        2_500_000
    )]);
}

#[test]
fn mistyped_asset_id_builds_nothing() {
    let config = config();
    let typo = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGN";
    assert_eq!(
        IntentBuilder::new(&config).build(&bidder(), &place_bid(typo, "3", "5", "7"), &none!()),
        Err(IntentError::Input(InputError::Principal(Field::AssetId, PrincipalError::Checksum(typo.to_owned()))))
    );
}

#[test]
fn invalid_input_builds_nothing() {
    let config = config();
    let builder = IntentBuilder::new(&config);
    assert_eq!(
        builder.build(&bidder(), &create_auction("", "50"), &none!()),
        Err(IntentError::Input(InputError::Missing(Field::TokenId)))
    );
    assert_eq!(
        builder.build(&bidder(), &create_auction("1", "fifty"), &none!()),
        Err(IntentError::Input(InputError::NotNumeric(Field::StartPrice, s!("fifty"))))
    );
    assert_eq!(
        builder.build(&bidder(), &place_bid(DEPLOYER, "1", "-5", "1"), &none!()),
        Err(IntentError::Input(InputError::Negative(Field::BidAmount)))
    );
    assert_eq!(
        builder.build(&bidder(), &place_bid("", "1", "5", "1"), &none!()),
        Err(IntentError::Input(InputError::Missing(Field::AssetId)))
    );
}

#[test]
fn place_bid_example() {
    let config = mainnet();
    let session = SessionContext::signed_in(SP_BIDDER.parse().unwrap());
    let request = IntentBuilder::new(&config)
        .build(&session, &place_bid(SP_MARKET, "3", "5", "7"), &none!())
        .unwrap();

    assert_eq!(request.network, Network::Mainnet);
    assert_eq!(request.contract.to_string(), format!("{SP_MARKET}.auction"));
    assert_eq!(request.function.as_str(), "place-a-bid");
    let collection: ContractPrincipal = format!("{SP_MARKET}.sip009").parse().unwrap();
    assert_eq!(request.args, vec![
        ClarityValue::contract_principal(collection),
        ClarityValue::tuple([
            (ClarityName::from_static("token-id"), ClarityValue::uint(3u8)),
            (ClarityName::from_static("bid-amount"), ClarityValue::uint(5_000_000u32)),
            (ClarityName::from_static("auction-id"), ClarityValue::uint(7u8)),
        ]),
    ]);
    assert_eq!(request.post_conditions, vec![PostCondition::stx(
        SP_BIDDER.parse::<Principal>().unwrap(),
        FungibleConditionCode::LessEqual,
        5_000_000
    )]);
}

#[test]
fn whitelist_example() {
    let config = mainnet();
    let session = SessionContext::signed_in(SP_BIDDER.parse().unwrap());
    let form = ActionForm::Whitelist(WhitelistForm { asset_id: SP_MARKET.to_owned() });
    let request = IntentBuilder::new(&config).build(&session, &form, &none!()).unwrap();

    assert_eq!(request.function.as_str(), "set-whitelisted");
    assert_eq!(request.args, vec![
        ClarityValue::contract_principal(format!("{SP_MARKET}.sip009").parse().unwrap()),
        ClarityValue::Bool(true),
    ]);
    let [PostCondition::NonFungible { principal, code, .. }] = request.post_conditions.as_slice() else {
        panic!("single non-fungible condition expected");
    };
    assert_eq!(principal, &Principal::Contract(config.marketplace.clone()));
    assert_eq!(*code, NonFungibleConditionCode::DoesNotSend);
}

#[test]
fn session_must_match_network() {
    let config = config();
    let builder = IntentBuilder::new(&config);
    let form = place_bid(DEPLOYER, "3", "5", "7");
    assert_eq!(builder.build(&SessionContext::signed_out(), &form, &none!()), Err(IntentError::SignedOut));

    let mainnet_user = SessionContext::signed_in(SP_BIDDER.parse().unwrap());
    assert!(matches!(
        builder.build(&mainnet_user, &form, &none!()),
        Err(IntentError::WrongNetwork(_, Network::Mocknet))
    ));
    assert!(matches!(
        builder.build(&bidder(), &place_bid(SP_MARKET, "3", "5", "7"), &none!()),
        Err(IntentError::Input(InputError::WrongNetwork(Field::AssetId, _, Network::Mocknet)))
    ));
}

#[test]
fn configured_function_names() {
    let mut config = config();
    config.functions.place_bid = ClarityName::from_static("place-a-bidsr");
    let request = IntentBuilder::new(&config)
        .build(&bidder(), &place_bid(DEPLOYER, "3", "5", "7"), &none!())
        .unwrap();
    assert_eq!(request.function.as_str(), "place-a-bidsr");
}
