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

//! The marketplace action table: which contract each action calls, the shape of its arguments and
//! the post-conditions guarding it.

use clarity_callreq::{ClarityValue, FungibleConditionCode, NonFungibleConditionCode, Principal};

/// State-changing marketplace action.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionKind {
    #[display("whitelist")]
    Whitelist,

    #[display("create-auction")]
    CreateAuction,

    #[display("place-bid")]
    PlaceBid,

    #[display("claim-win")]
    ClaimWin,

    #[display("request-refund")]
    RequestRefund,

    #[display("mint")]
    Mint,
}

impl ActionKind {
    pub const ALL: [ActionKind; 6] = [
        ActionKind::Whitelist,
        ActionKind::CreateAuction,
        ActionKind::PlaceBid,
        ActionKind::ClaimWin,
        ActionKind::RequestRefund,
        ActionKind::Mint,
    ];

    pub fn spec(self) -> &'static ActionSpec {
        match self {
            ActionKind::Whitelist => &WHITELIST,
            ActionKind::CreateAuction => &CREATE_AUCTION,
            ActionKind::PlaceBid => &PLACE_BID,
            ActionKind::ClaimWin => &CLAIM_WIN,
            ActionKind::RequestRefund => &REQUEST_REFUND,
            ActionKind::Mint => &MINT,
        }
    }

    /// Message shown to the user once the wallet has broadcast the transaction.
    pub fn notice(self) -> &'static str { self.spec().notice }
}

/// Read-only marketplace function polled for the bid status of the current user.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReadKind {
    #[display("bidder-total")]
    BidderTotal,

    #[display("highest-bid")]
    HighestBid,
}

impl ReadKind {
    pub const ALL: [ReadKind; 2] = [ReadKind::BidderTotal, ReadKind::HighestBid];
}

/// Contract an action is sent to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display)]
pub enum Target {
    #[display("marketplace")]
    Marketplace,

    /// NFT collection contract, as configured for minting.
    #[display("collection")]
    Collection,
}

/// Principal whose transfer a post-condition bounds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display)]
pub enum Party {
    /// The signed-in user sending the transaction.
    #[display("caller")]
    Caller,

    /// The marketplace contract holding escrowed tokens and bids.
    #[display("marketplace")]
    Marketplace,
}

/// Clarity type an argument must have.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ArgShape {
    UInt,
    Bool,
    StandardPrincipal,
    ContractPrincipal,
    Tuple(&'static [(&'static str, ArgShape)]),
}

impl ArgShape {
    pub fn admits(self, value: &ClarityValue) -> bool {
        match (self, value) {
            (ArgShape::UInt, ClarityValue::UInt(_)) => true,
            (ArgShape::Bool, ClarityValue::Bool(_)) => true,
            (ArgShape::StandardPrincipal, ClarityValue::Principal(Principal::Standard(_))) => true,
            (ArgShape::ContractPrincipal, ClarityValue::Principal(Principal::Contract(_))) => true,
            (ArgShape::Tuple(fields), ClarityValue::Tuple(data)) => {
                data.len() == fields.len()
                    && fields
                        .iter()
                        .zip(data)
                        .all(|((name, shape), (key, value))| key.as_str() == *name && shape.admits(value))
            }
            _ => false,
        }
    }
}

/// Post-condition an action must carry.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ConditionShape {
    /// Transfer of the collection NFT by the party.
    Nft { party: Party, code: NonFungibleConditionCode },
    /// Transfer of micro-STX by the party, bounded by the action amount.
    Stx { party: Party, code: FungibleConditionCode },
}

impl ConditionShape {
    pub fn party(self) -> Party {
        match self {
            ConditionShape::Nft { party, .. } | ConditionShape::Stx { party, .. } => party,
        }
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ActionSpec {
    pub kind: ActionKind,
    pub target: Target,
    pub args: &'static [ArgShape],
    pub conditions: &'static [ConditionShape],
    pub notice: &'static str,
}

impl ActionSpec {
    pub fn admits_args(&self, args: &[ClarityValue]) -> bool {
        args.len() == self.args.len() && self.args.iter().zip(args).all(|(shape, value)| shape.admits(value))
    }

    /// Whether an STX post-condition, and thus a known amount, is required.
    pub fn bounds_stx(&self) -> bool { self.conditions.iter().any(|c| matches!(c, ConditionShape::Stx { .. })) }
}

const CREATE_AUCTION_TERMS: &[(&str, ArgShape)] =
    &[("token-id", ArgShape::UInt), ("start-price", ArgShape::UInt), ("expiry", ArgShape::UInt)];

const BID_TERMS: &[(&str, ArgShape)] =
    &[("token-id", ArgShape::UInt), ("bid-amount", ArgShape::UInt), ("auction-id", ArgShape::UInt)];

static WHITELIST: ActionSpec = ActionSpec {
    kind: ActionKind::Whitelist,
    target: Target::Marketplace,
    args: &[ArgShape::ContractPrincipal, ArgShape::Bool],
    conditions: &[ConditionShape::Nft { party: Party::Marketplace, code: NonFungibleConditionCode::DoesNotSend }],
    notice: "Contract whitelisted, an auction can be created after a block confirmation",
};

static CREATE_AUCTION: ActionSpec = ActionSpec {
    kind: ActionKind::CreateAuction,
    target: Target::Marketplace,
    args: &[ArgShape::ContractPrincipal, ArgShape::Tuple(CREATE_AUCTION_TERMS)],
    conditions: &[ConditionShape::Nft { party: Party::Caller, code: NonFungibleConditionCode::Sends }],
    notice: "Auction creation submitted, wait for a block confirmation",
};

static PLACE_BID: ActionSpec = ActionSpec {
    kind: ActionKind::PlaceBid,
    target: Target::Marketplace,
    args: &[ArgShape::ContractPrincipal, ArgShape::Tuple(BID_TERMS)],
    conditions: &[ConditionShape::Stx { party: Party::Caller, code: FungibleConditionCode::LessEqual }],
    notice: "Bid placed successfully",
};

static CLAIM_WIN: ActionSpec = ActionSpec {
    kind: ActionKind::ClaimWin,
    target: Target::Marketplace,
    args: &[ArgShape::ContractPrincipal, ArgShape::UInt],
    conditions: &[
        ConditionShape::Nft { party: Party::Marketplace, code: NonFungibleConditionCode::Sends },
        ConditionShape::Stx { party: Party::Marketplace, code: FungibleConditionCode::LessEqual },
    ],
    notice: "Win claim successful, wait for block confirmation to get your claim",
};

static REQUEST_REFUND: ActionSpec = ActionSpec {
    kind: ActionKind::RequestRefund,
    target: Target::Marketplace,
    args: &[ArgShape::ContractPrincipal, ArgShape::UInt],
    conditions: &[ConditionShape::Stx { party: Party::Marketplace, code: FungibleConditionCode::LessEqual }],
    notice: "Refund request successful, wait for block confirmation to get your refund",
};

static MINT: ActionSpec = ActionSpec {
    kind: ActionKind::Mint,
    target: Target::Collection,
    args: &[ArgShape::StandardPrincipal],
    conditions: &[],
    notice: "NFT mint submitted",
};

#[cfg(test)]
mod test {
    use clarity_callreq::ClarityName;

    use super::*;

    #[test]
    fn table_is_consistent() {
        for kind in ActionKind::ALL {
            assert_eq!(kind.spec().kind, kind);
            assert!(!kind.notice().is_empty());
        }
        assert!(ActionKind::PlaceBid.spec().bounds_stx());
        assert!(!ActionKind::CreateAuction.spec().bounds_stx());
        assert_eq!(ActionKind::ClaimWin.spec().conditions.len(), 2);
        assert!(ActionKind::Mint.spec().conditions.is_empty());
        assert_eq!(ActionKind::Mint.spec().target, Target::Collection);
    }

    #[test]
    fn arg_shapes() {
        let contract = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM.sip009".parse().unwrap();
        let terms = ClarityValue::tuple([
            (ClarityName::from_static("token-id"), ClarityValue::uint(1u8)),
            (ClarityName::from_static("bid-amount"), ClarityValue::uint(5_000_000u32)),
            (ClarityName::from_static("auction-id"), ClarityValue::uint(7u8)),
        ]);
        let spec = ActionKind::PlaceBid.spec();
        assert!(spec.admits_args(&[ClarityValue::contract_principal(contract), terms.clone()]));
        assert!(!spec.admits_args(&[terms.clone()]));

        let reordered = ClarityValue::tuple([
            (ClarityName::from_static("bid-amount"), ClarityValue::uint(5_000_000u32)),
            (ClarityName::from_static("token-id"), ClarityValue::uint(1u8)),
            (ClarityName::from_static("auction-id"), ClarityValue::uint(7u8)),
        ]);
        assert!(!ArgShape::Tuple(BID_TERMS).admits(&reordered));
        assert!(ArgShape::Tuple(BID_TERMS).admits(&terms));
        assert!(!ArgShape::Tuple(CREATE_AUCTION_TERMS).admits(&terms));
        assert!(!ArgShape::UInt.admits(&ClarityValue::Int(1)));
    }

    #[test]
    fn names() {
        assert_eq!(ActionKind::RequestRefund.to_string(), "request-refund");
        assert_eq!(ReadKind::BidderTotal.to_string(), "bidder-total");
        assert_eq!(Party::Caller.to_string(), "caller");
    }
}
