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

use core::borrow::Borrow;
use core::str::FromStr;

pub const CLARITY_NAME_MAX_LEN: usize = 128;
pub const CONTRACT_NAME_MAX_LEN: usize = 40;

#[derive(Clone, Eq, PartialEq, Debug, Display, Error)]
#[display(doc_comments)]
pub enum NameError {
    /// name must not be empty.
    Empty,

    /// name '{0}' is longer than {1} characters.
    TooLong(String, usize),

    /// name '{0}' must start with an ASCII letter.
    LeadingChar(String),

    /// name '{0}' contains invalid character '{1}'.
    InvalidChar(String, char),
}

fn check(s: &str, max_len: usize, allowed: impl Fn(char) -> bool) -> Result<(), NameError> {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return Err(NameError::Empty);
    };
    if s.len() > max_len {
        return Err(NameError::TooLong(s.to_owned(), max_len));
    }
    if !first.is_ascii_alphabetic() {
        return Err(NameError::LeadingChar(s.to_owned()));
    }
    if let Some(c) = chars.find(|c| !c.is_ascii_alphanumeric() && !allowed(*c)) {
        return Err(NameError::InvalidChar(s.to_owned(), c));
    }
    Ok(())
}

/// Name of a Clarity function, tuple field or asset.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display)]
#[display(inner)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(try_from = "String", into = "String"))]
pub struct ClarityName(String);

impl ClarityName {
    /// Constructs a name from a string literal known to be valid.
    ///
    /// # Panics
    ///
    /// If the literal is not a valid Clarity name.
    pub fn from_static(name: &'static str) -> Self {
        Self::from_str(name).expect("invalid static Clarity name")
    }

    pub fn as_str(&self) -> &str { &self.0 }
}

impl FromStr for ClarityName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        check(s, CLARITY_NAME_MAX_LEN, |c| "-_!?+<>=/*".contains(c))?;
        Ok(Self(s.to_owned()))
    }
}

impl TryFrom<String> for ClarityName {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self, Self::Error> { Self::from_str(&value) }
}

impl From<ClarityName> for String {
    fn from(value: ClarityName) -> Self { value.0 }
}

impl Borrow<str> for ClarityName {
    fn borrow(&self) -> &str { &self.0 }
}

/// Name of a contract deployed under some account.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display)]
#[display(inner)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(try_from = "String", into = "String"))]
pub struct ContractName(String);

impl ContractName {
    /// # Panics
    ///
    /// If the literal is not a valid contract name.
    pub fn from_static(name: &'static str) -> Self {
        Self::from_str(name).expect("invalid static contract name")
    }

    pub fn as_str(&self) -> &str { &self.0 }
}

impl FromStr for ContractName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        check(s, CONTRACT_NAME_MAX_LEN, |c| c == '-' || c == '_')?;
        Ok(Self(s.to_owned()))
    }
}

impl TryFrom<String> for ContractName {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self, Self::Error> { Self::from_str(&value) }
}

impl From<ContractName> for String {
    fn from(value: ContractName) -> Self { value.0 }
}
