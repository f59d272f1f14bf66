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

use std::path::{Path, PathBuf};

use anyhow::bail;
use log::debug;
use nftauction::{
    ActionForm, BidBoard, ContractCallRequest, ContractPrincipal, CreateAuctionForm, IntentBuilder, MarketConfig,
    MicroStx, Network, PlaceBidForm, SessionContext, SettleForm, StandardPrincipal, WhitelistForm,
};

const LOG_TARGET: &str = "auctionx";

#[derive(Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Marketplace configuration file (.toml, .yaml or .yml)
    #[clap(short, long, global = true, default_value = "auction.toml")]
    pub config: PathBuf,

    /// Account which signs the calls
    #[clap(short, long, global = true)]
    pub sender: Option<StandardPrincipal>,

    #[command(subcommand)]
    pub command: Cmd,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// Write a configuration file for a marketplace deployment
    Init {
        /// Auction marketplace contract, as `ADDRESS.contract-name`
        marketplace: ContractPrincipal,

        /// Network the marketplace is deployed on
        #[clap(short, long, default_value = "mocknet")]
        network: Network,

        /// Overwrite an existing configuration file
        #[clap(short, long)]
        force: bool,
    },

    /// Allow auctions of an NFT collection
    Whitelist {
        /// Collection contract, or the account which deployed it
        asset_id: String,
    },

    /// Put a token on auction
    CreateAuction {
        /// Collection contract, or the account which deployed it
        asset_id: String,
        token_id: String,
        /// Start price in STX
        start_price: String,
        /// Number of blocks the auction stays open
        duration: String,
    },

    /// Bid on an open auction
    PlaceBid {
        /// Collection contract, or the account which deployed it
        asset_id: String,
        token_id: String,
        /// Bid amount in STX
        bid_amount: String,
        auction_id: String,
    },

    /// Settle a finished auction, claiming the won token
    ClaimWin {
        /// Collection contract, or the account which deployed it
        asset_id: String,
        auction_id: String,

        /// Highest bid of the auction, in micro-STX, bounding the payout
        #[clap(long)]
        highest_bid: Option<u128>,
    },

    /// Request refund of the bids on an auction which was won by someone else
    RequestRefund {
        /// Collection contract, or the account which deployed it
        asset_id: String,
        auction_id: String,

        /// Total of own bids, in micro-STX, bounding the refund
        #[clap(long)]
        prior_bid: Option<u128>,
    },

    /// Mint a collection token to the sender
    Mint,

    /// Print the read-only queries of the sender bid status
    Queries,
}

impl Args {
    pub fn exec(&self) -> anyhow::Result<()> {
        if let Cmd::Init { marketplace, network, force } = &self.command {
            return init(&self.config, marketplace, *network, *force);
        }

        let config = MarketConfig::load(&self.config)?;
        debug!(target: LOG_TARGET, "Using {} marketplace {}", config.network, config.marketplace);
        let builder = IntentBuilder::new(&config);
        let session = match &self.sender {
            Some(sender) => SessionContext::signed_in(sender.clone()),
            None => SessionContext::signed_out(),
        };

        match self.command.form() {
            Some(form) => {
                let request = builder.build(&session, &form, &self.command.bid_board())?;
                print_request(&request)?;
            }
            None => {
                for (kind, query) in builder.queries(&session)? {
                    println!("# {kind}");
                    println!("{}", serde_yaml::to_string(&query)?);
                    println!("# {query}\n");
                }
            }
        }
        Ok(())
    }
}

impl Cmd {
    /// Form of a state-changing action; `None` for the commands not calling the marketplace.
    fn form(&self) -> Option<ActionForm> {
        Some(match self {
            Cmd::Init { .. } | Cmd::Queries => return None,
            Cmd::Whitelist { asset_id } => ActionForm::Whitelist(WhitelistForm { asset_id: asset_id.clone() }),
            Cmd::CreateAuction { asset_id, token_id, start_price, duration } => {
                ActionForm::CreateAuction(CreateAuctionForm {
                    asset_id: asset_id.clone(),
                    token_id: token_id.clone(),
                    start_price: start_price.clone(),
                    duration: duration.clone(),
                })
            }
            Cmd::PlaceBid { asset_id, token_id, bid_amount, auction_id } => ActionForm::PlaceBid(PlaceBidForm {
                asset_id: asset_id.clone(),
                bid_amount: bid_amount.clone(),
                token_id: token_id.clone(),
                auction_id: auction_id.clone(),
            }),
            Cmd::ClaimWin { asset_id, auction_id, .. } => {
                ActionForm::ClaimWin(SettleForm { asset_id: asset_id.clone(), auction_id: auction_id.clone() })
            }
            Cmd::RequestRefund { asset_id, auction_id, .. } => {
                ActionForm::RequestRefund(SettleForm { asset_id: asset_id.clone(), auction_id: auction_id.clone() })
            }
            Cmd::Mint => ActionForm::Mint,
        })
    }

    // Bid status as it would have been fetched by the front-end.
    fn bid_board(&self) -> BidBoard {
        match self {
            Cmd::ClaimWin { highest_bid, .. } => {
                BidBoard { highest_bid: highest_bid.map(MicroStx::from), ..BidBoard::default() }
            }
            Cmd::RequestRefund { prior_bid, .. } => {
                BidBoard { bidder_total: prior_bid.map(MicroStx::from), ..BidBoard::default() }
            }
            _ => BidBoard::default(),
        }
    }
}

fn init(path: &Path, marketplace: &ContractPrincipal, network: Network, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        bail!("configuration file '{}' already exists; use --force to overwrite it", path.display());
    }
    let config = MarketConfig::new(network, marketplace.clone());
    config.validate()?;
    config.save(path)?;
    println!("Configuration for {network} marketplace {marketplace} saved to '{}'", path.display());
    Ok(())
}

fn print_request(request: &ContractCallRequest) -> anyhow::Result<()> {
    println!("{}", serde_yaml::to_string(request)?);
    println!("# {request}");
    for condition in &request.post_conditions {
        println!("#   {condition}");
    }
    Ok(())
}
