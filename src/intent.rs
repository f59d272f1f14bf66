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

//! Construction of marketplace contract-call requests out of validated action parameters.
//!
//! Every request is assembled from the action table: the builder resolves the target contract and
//! function name, checks the argument list against the declared shape and derives the
//! post-conditions, so that the amount bounding a transfer is the very value passed to the
//! contract.

use clarity_callreq::{
    ClarityName, ClarityValue, ContractCallRequest, ContractPrincipal, Network, PostCondition, PostConditionMode,
    Principal, ReadOnlyQuery, StandardPrincipal,
};

use crate::{
    ActionForm, ActionKind, BidBoard, ConditionShape, CreateAuctionParams, InputError, MarketConfig, MicroStx, Party,
    PlaceBidParams, ReadKind, Session, SettleParams, Target, WhitelistParams,
};

#[derive(Clone, Eq, PartialEq, Debug, Display, Error, From)]
#[display(doc_comments)]
pub enum IntentError {
    /// wallet is not connected; sign in to continue.
    SignedOut,

    /// account {0} does not belong to {1}.
    WrongNetwork(StandardPrincipal, Network),

    #[from]
    #[display(inner)]
    Input(InputError),

    /// arguments of {0} do not match the contract function signature.
    ShapeMismatch(ActionKind),

    /// amount bounding the {0} transfer is not known yet; wait for the bid status to be fetched.
    UnknownAmount(ActionKind),
}

/// Builds contract-call requests and read-only queries for a marketplace deployment.
#[derive(Copy, Clone, Debug)]
pub struct IntentBuilder<'c> {
    config: &'c MarketConfig,
}

impl<'c> IntentBuilder<'c> {
    pub fn new(config: &'c MarketConfig) -> Self { Self { config } }

    pub fn config(&self) -> &'c MarketConfig { self.config }

    /// Allows auctions of the collection tokens on the marketplace.
    pub fn whitelist(
        &self,
        session: &impl Session,
        params: &WhitelistParams,
    ) -> Result<ContractCallRequest, IntentError> {
        let args = vec![ClarityValue::contract_principal(params.collection.clone()), ClarityValue::Bool(true)];
        self.assemble(session, ActionKind::Whitelist, &params.collection, self.unknown_token(), None, args)
    }

    /// Puts a token into the marketplace escrow, opening an auction for it.
    pub fn create_auction(
        &self,
        session: &impl Session,
        params: &CreateAuctionParams,
    ) -> Result<ContractCallRequest, IntentError> {
        let terms = ClarityValue::tuple([
            (ClarityName::from_static("token-id"), ClarityValue::uint(params.token_id)),
            (ClarityName::from_static("start-price"), ClarityValue::uint(*params.start_price)),
            (ClarityName::from_static("expiry"), ClarityValue::uint(params.duration)),
        ]);
        let args = vec![ClarityValue::contract_principal(params.collection.clone()), terms];
        let token = ClarityValue::uint(params.token_id);
        self.assemble(session, ActionKind::CreateAuction, &params.collection, token, None, args)
    }

    pub fn place_bid(&self, session: &impl Session, params: &PlaceBidParams) -> Result<ContractCallRequest, IntentError> {
        let terms = ClarityValue::tuple([
            (ClarityName::from_static("token-id"), ClarityValue::uint(params.token_id)),
            (ClarityName::from_static("bid-amount"), ClarityValue::uint(*params.bid)),
            (ClarityName::from_static("auction-id"), ClarityValue::uint(params.auction_id)),
        ]);
        let args = vec![ClarityValue::contract_principal(params.collection.clone()), terms];
        let token = ClarityValue::uint(params.token_id);
        self.assemble(session, ActionKind::PlaceBid, &params.collection, token, Some(params.bid), args)
    }

    /// Settles a finished auction; the marketplace releases the token and pays out at most `payout`.
    pub fn claim_win(
        &self,
        session: &impl Session,
        params: &SettleParams,
        payout: MicroStx,
    ) -> Result<ContractCallRequest, IntentError> {
        let args = self.settle_args(params);
        self.assemble(session, ActionKind::ClaimWin, &params.collection, self.unknown_token(), Some(payout), args)
    }

    /// Withdraws the bids of an outbid user; the marketplace refunds at most `prior_bid`.
    pub fn request_refund(
        &self,
        session: &impl Session,
        params: &SettleParams,
        prior_bid: MicroStx,
    ) -> Result<ContractCallRequest, IntentError> {
        let args = self.settle_args(params);
        let token = self.unknown_token();
        self.assemble(session, ActionKind::RequestRefund, &params.collection, token, Some(prior_bid), args)
    }

    /// Mints a collection token to the signed-in account.
    pub fn mint(&self, session: &impl Session) -> Result<ContractCallRequest, IntentError> {
        let caller = self.caller(session)?;
        let collection = self.config.mint_target();
        let args = vec![ClarityValue::standard_principal(caller)];
        self.assemble(session, ActionKind::Mint, &collection, self.unknown_token(), None, args)
    }

    /// Validates a filled-in form and builds the request for it. Win claims and refund requests
    /// take their transfer bounds from the last observed bid status.
    pub fn build(
        &self,
        session: &impl Session,
        form: &ActionForm,
        board: &BidBoard,
    ) -> Result<ContractCallRequest, IntentError> {
        match form {
            ActionForm::Whitelist(form) => self.whitelist(session, &form.validate(self.config)?),
            ActionForm::CreateAuction(form) => self.create_auction(session, &form.validate(self.config)?),
            ActionForm::PlaceBid(form) => self.place_bid(session, &form.validate(self.config)?),
            ActionForm::ClaimWin(form) => {
                let params = form.validate(self.config)?;
                let payout = board.highest_bid.ok_or(IntentError::UnknownAmount(ActionKind::ClaimWin))?;
                self.claim_win(session, &params, payout)
            }
            ActionForm::RequestRefund(form) => {
                let params = form.validate(self.config)?;
                let prior_bid = board.bidder_total.ok_or(IntentError::UnknownAmount(ActionKind::RequestRefund))?;
                self.request_refund(session, &params, prior_bid)
            }
            ActionForm::Mint => self.mint(session),
        }
    }

    /// Read-only query of the bid status of the signed-in account.
    pub fn query(&self, session: &impl Session, kind: ReadKind) -> Result<ReadOnlyQuery, IntentError> {
        let caller = self.caller(session)?;
        let function = self.config.functions.read(kind).clone();
        Ok(ReadOnlyQuery::new(self.config.marketplace.clone(), function, caller.clone(), self.config.network)
            .push_arg(ClarityValue::standard_principal(caller)))
    }

    pub fn queries(&self, session: &impl Session) -> Result<Vec<(ReadKind, ReadOnlyQuery)>, IntentError> {
        ReadKind::ALL
            .into_iter()
            .map(|kind| self.query(session, kind).map(|query| (kind, query)))
            .collect()
    }

    fn caller(&self, session: &impl Session) -> Result<StandardPrincipal, IntentError> {
        let principal = session.current_principal().ok_or(IntentError::SignedOut)?;
        if !self.config.network.admits(principal) {
            return Err(IntentError::WrongNetwork(principal.clone(), self.config.network));
        }
        Ok(principal.clone())
    }

    fn settle_args(&self, params: &SettleParams) -> Vec<ClarityValue> {
        vec![ClarityValue::contract_principal(params.collection.clone()), ClarityValue::uint(params.auction_id)]
    }

    // Value standing for the token in conditions of actions which do not name a specific token.
    fn unknown_token(&self) -> ClarityValue { ClarityValue::buffer_from_str(self.config.asset_name.as_str()) }

    fn assemble(
        &self,
        session: &impl Session,
        kind: ActionKind,
        collection: &ContractPrincipal,
        token: ClarityValue,
        amount: Option<MicroStx>,
        args: Vec<ClarityValue>,
    ) -> Result<ContractCallRequest, IntentError> {
        let caller = self.caller(session)?;
        let spec = kind.spec();
        if !spec.admits_args(&args) {
            return Err(IntentError::ShapeMismatch(kind));
        }

        let contract = match spec.target {
            Target::Marketplace => self.config.marketplace.clone(),
            Target::Collection => self.config.mint_target(),
        };
        let function = self.config.functions.get(kind).clone();
        let mut request = ContractCallRequest::new(contract, function, self.config.network)
            .with_args(args)
            .use_post_condition_mode(PostConditionMode::Deny);

        for condition in spec.conditions {
            let principal = match condition.party() {
                Party::Caller => Principal::Standard(caller.clone()),
                Party::Marketplace => Principal::Contract(self.config.marketplace.clone()),
            };
            let condition = match *condition {
                ConditionShape::Nft { code, .. } => {
                    PostCondition::nft(principal, self.config.asset_info(collection), token.clone(), code)
                }
                ConditionShape::Stx { code, .. } => {
                    let amount = amount.ok_or(IntentError::UnknownAmount(kind))?;
                    PostCondition::stx(principal, code, *amount)
                }
            };
            request = request.add_post_condition(condition);
        }

        if let Some(app) = &self.config.app {
            request = request.use_app(app.clone());
        }
        Ok(request)
    }
}
