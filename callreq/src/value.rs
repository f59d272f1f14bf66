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

use core::fmt::{self, Display, Formatter, Write};

use indexmap::IndexMap;

use crate::{ClarityName, ContractPrincipal, Principal, StandardPrincipal};

/// Fields of a Clarity tuple, kept in the order they were provided.
pub type TupleData = IndexMap<ClarityName, ClarityValue>;

/// Value of the Clarity type system, as passed to contract functions and returned by read-only
/// function calls.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "kebab-case"))]
pub enum ClarityValue {
    Int(i128),
    UInt(u128),
    Bool(bool),
    Buffer(Vec<u8>),
    StringAscii(String),
    StringUtf8(String),
    Principal(Principal),
    Tuple(TupleData),
    List(Vec<ClarityValue>),
    OptionalNone,
    OptionalSome(Box<ClarityValue>),
    ResponseOk(Box<ClarityValue>),
    ResponseErr(Box<ClarityValue>),
}

impl ClarityValue {
    pub fn uint(value: impl Into<u128>) -> Self { Self::UInt(value.into()) }

    pub fn standard_principal(address: StandardPrincipal) -> Self { Self::Principal(Principal::Standard(address)) }

    pub fn contract_principal(contract: ContractPrincipal) -> Self { Self::Principal(Principal::Contract(contract)) }

    pub fn buffer_from_str(s: &str) -> Self { Self::Buffer(s.as_bytes().to_vec()) }

    pub fn tuple(fields: impl IntoIterator<Item = (ClarityName, ClarityValue)>) -> Self {
        Self::Tuple(fields.into_iter().collect())
    }

    pub fn some(value: ClarityValue) -> Self { Self::OptionalSome(Box::new(value)) }

    pub fn ok(value: ClarityValue) -> Self { Self::ResponseOk(Box::new(value)) }

    pub fn err(value: ClarityValue) -> Self { Self::ResponseErr(Box::new(value)) }

    pub fn as_uint(&self) -> Option<u128> {
        match self {
            Self::UInt(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns a tuple field, if the value is a tuple containing it.
    pub fn field(&self, name: &str) -> Option<&ClarityValue> {
        match self {
            Self::Tuple(fields) => fields.get(name),
            _ => None,
        }
    }

    /// Extracts an unsigned amount from the shapes read-only functions use to report it: a bare
    /// `uint`, `(some uint)`, `(ok uint)` or `(ok (some uint))`.
    ///
    /// Returns `None` for `none`, error responses and values of any other type.
    pub fn amount(&self) -> Option<u128> {
        match self {
            Self::UInt(value) => Some(*value),
            Self::OptionalSome(inner) | Self::ResponseOk(inner) => inner.amount(),
            _ => None,
        }
    }
}

impl From<bool> for ClarityValue {
    fn from(value: bool) -> Self { Self::Bool(value) }
}

impl From<u128> for ClarityValue {
    fn from(value: u128) -> Self { Self::UInt(value) }
}

impl From<i128> for ClarityValue {
    fn from(value: i128) -> Self { Self::Int(value) }
}

impl From<Principal> for ClarityValue {
    fn from(value: Principal) -> Self { Self::Principal(value) }
}

impl Display for ClarityValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::UInt(value) => write!(f, "u{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Buffer(bytes) => {
                f.write_str("0x")?;
                bytes.iter().try_for_each(|byte| write!(f, "{byte:02x}"))
            }
            Self::StringAscii(s) => {
                f.write_char('"')?;
                write_escaped(f, s)?;
                f.write_char('"')
            }
            Self::StringUtf8(s) => {
                f.write_str("u\"")?;
                write_escaped(f, s)?;
                f.write_char('"')
            }
            Self::Principal(principal) => write!(f, "'{principal}"),
            Self::Tuple(fields) => {
                f.write_str("(tuple")?;
                for (name, value) in fields {
                    write!(f, " ({name} {value})")?;
                }
                f.write_char(')')
            }
            Self::List(items) => {
                f.write_str("(list")?;
                for item in items {
                    write!(f, " {item}")?;
                }
                f.write_char(')')
            }
            Self::OptionalNone => f.write_str("none"),
            Self::OptionalSome(inner) => write!(f, "(some {inner})"),
            Self::ResponseOk(inner) => write!(f, "(ok {inner})"),
            Self::ResponseErr(inner) => write!(f, "(err {inner})"),
        }
    }
}

fn write_escaped(f: &mut Formatter<'_>, s: &str) -> fmt::Result {
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            c if c.is_ascii() && !c.is_ascii_control() => f.write_char(c)?,
            c => write!(f, "\\u{{{:x}}}", c as u32)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn deployer() -> StandardPrincipal { "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM".parse().unwrap() }

    #[test]
    fn display() {
        assert_eq!(ClarityValue::uint(5u64).to_string(), "u5");
        assert_eq!(ClarityValue::Int(-5).to_string(), "-5");
        assert_eq!(ClarityValue::from(true).to_string(), "true");
        assert_eq!(ClarityValue::buffer_from_str("nft").to_string(), "0x6e6674");
        assert_eq!(ClarityValue::StringAscii(s!("say \"hi\"")).to_string(), r#""say \"hi\"""#);
        assert_eq!(ClarityValue::StringUtf8(s!("€")).to_string(), r#"u"\u{20ac}""#);
        assert_eq!(ClarityValue::standard_principal(deployer()).to_string(), "'ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM");
        assert_eq!(ClarityValue::some(ClarityValue::OptionalNone).to_string(), "(some none)");
        assert_eq!(ClarityValue::List(vec![ClarityValue::uint(1u8), ClarityValue::uint(2u8)]).to_string(), "(list u1 u2)");
    }

    #[test]
    fn tuple_keeps_order() {
        let tuple = ClarityValue::tuple([
            (ClarityName::from_static("token-id"), ClarityValue::uint(3u8)),
            (ClarityName::from_static("bid-amount"), ClarityValue::uint(5_000_000u32)),
            (ClarityName::from_static("auction-id"), ClarityValue::uint(7u8)),
        ]);
        assert_eq!(tuple.to_string(), "(tuple (token-id u3) (bid-amount u5000000) (auction-id u7))");
        assert_eq!(tuple.field("bid-amount"), Some(&ClarityValue::UInt(5_000_000)));
        assert_eq!(tuple.field("expiry"), None);
    }

    #[test]
    fn amounts() {
        assert_eq!(ClarityValue::uint(10u8).amount(), Some(10));
        assert_eq!(ClarityValue::ok(ClarityValue::some(ClarityValue::uint(10u8))).amount(), Some(10));
        assert_eq!(ClarityValue::ok(ClarityValue::uint(0u8)).amount(), Some(0));
        assert_eq!(ClarityValue::OptionalNone.amount(), None);
        assert_eq!(ClarityValue::err(ClarityValue::uint(404u16)).amount(), None);
        assert_eq!(ClarityValue::Int(10).amount(), None);
    }
}
