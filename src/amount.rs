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

use crate::{Field, InputError};

/// Number of micro-STX base units in one STX.
pub const SCALE: u128 = 1_000_000;
/// Number of decimal places a human-unit amount may carry.
pub const SCALE_DECIMALS: usize = 6;

/// Amount in base units (micro-STX), as contracts and post-conditions see it.
#[derive(Wrapper, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Display, From)]
#[wrapper(Deref)]
#[display("{0} uSTX")]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct MicroStx(u128);

impl MicroStx {
    pub const ZERO: Self = Self(0);

    /// Scales a whole number of STX into base units.
    pub fn from_stx(stx: u64) -> Self { Self(stx as u128 * SCALE) }

    /// Parses a human-unit (STX) decimal amount, like `5` or `0.25`, into base units.
    ///
    /// The conversion is exact; amounts with more than [`SCALE_DECIMALS`] significant decimal
    /// places are rejected instead of being rounded.
    pub fn parse_stx(field: Field, input: &str) -> Result<Self, InputError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(InputError::Missing(field));
        }
        if let Some(abs) = s.strip_prefix('-') {
            return Err(if is_decimal(abs) {
                InputError::Negative(field)
            } else {
                InputError::NotNumeric(field, s.to_owned())
            });
        }
        let unsigned = s.strip_prefix('+').unwrap_or(s);
        if !is_decimal(unsigned) {
            return Err(InputError::NotNumeric(field, s.to_owned()));
        }

        let (whole, frac) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        let frac = frac.trim_end_matches('0');
        if frac.len() > SCALE_DECIMALS {
            return Err(InputError::TooPrecise(field));
        }
        let whole = match whole {
            "" => 0u128,
            digits => digits.parse().map_err(|_| InputError::OutOfRange(field))?,
        };
        let frac = match frac {
            "" => 0u128,
            digits => format!("{digits:0<width$}", width = SCALE_DECIMALS)
                .parse()
                .map_err(|_| InputError::OutOfRange(field))?,
        };
        whole
            .checked_mul(SCALE)
            .and_then(|base| base.checked_add(frac))
            .map(Self)
            .ok_or(InputError::OutOfRange(field))
    }

    /// Formats the amount in STX, omitting insignificant decimal zeros.
    pub fn to_stx_string(&self) -> String {
        let whole = self.0 / SCALE;
        let frac = self.0 % SCALE;
        if frac == 0 {
            return whole.to_string();
        }
        let frac = format!("{frac:0>width$}", width = SCALE_DECIMALS);
        format!("{whole}.{}", frac.trim_end_matches('0'))
    }
}

/// Parses a non-negative integer form field (token id, auction id, block count).
pub fn parse_uint(field: Field, input: &str) -> Result<u128, InputError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(InputError::Missing(field));
    }
    if let Some(abs) = s.strip_prefix('-') {
        return Err(if is_decimal(abs) {
            InputError::Negative(field)
        } else {
            InputError::NotNumeric(field, s.to_owned())
        });
    }
    let unsigned = s.strip_prefix('+').unwrap_or(s);
    if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotNumeric(field, s.to_owned()));
    }
    unsigned.parse().map_err(|_| InputError::OutOfRange(field))
}

fn is_decimal(s: &str) -> bool {
    let (whole, frac) = s.split_once('.').unwrap_or((s, ""));
    !(whole.is_empty() && frac.is_empty())
        && whole.bytes().all(|b| b.is_ascii_digit())
        && frac.bytes().all(|b| b.is_ascii_digit())
}
