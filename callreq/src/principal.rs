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

use core::str::FromStr;

use sha2::{Digest, Sha256};

use crate::{ContractName, NameError};

/// Alphabet of Crockford base-32 encoding used by Stacks addresses.
pub const C32_ALPHABET: &str = "0123456789ABCDEFGHJKMNPQRSTVWXYZ";

const HASH160_LEN: usize = 20;
const CHECKSUM_LEN: usize = 4;

#[derive(Clone, Eq, PartialEq, Debug, Display, Error, From)]
#[display(doc_comments)]
pub enum PrincipalError {
    /// principal '{0}' must start with 'S'.
    Prefix(String),

    /// principal '{0}' has unknown address version '{1}'.
    Version(String, char),

    /// principal '{0}' does not encode a 20-byte account hash.
    Length(String),

    /// principal '{0}' contains character '{1}' which is not a part of c32 alphabet.
    Alphabet(String, char),

    /// principal '{0}' has an invalid checksum.
    Checksum(String),

    /// '{0}' is not a contract principal; expected ADDRESS.contract-name.
    NoContractName(String),

    /// invalid contract name - {0}
    #[from]
    ContractName(NameError),
}

/// Version of an account address, encoded by the second character of its c32 form.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display)]
pub enum AddressVersion {
    #[display("SP")]
    MainnetSingleSig,

    #[display("SM")]
    MainnetMultiSig,

    #[display("ST")]
    TestnetSingleSig,

    #[display("SN")]
    TestnetMultiSig,
}

impl AddressVersion {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'P' => Some(Self::MainnetSingleSig),
            'M' => Some(Self::MainnetMultiSig),
            'T' => Some(Self::TestnetSingleSig),
            'N' => Some(Self::TestnetMultiSig),
            _ => None,
        }
    }

    /// Version byte committed to by the address checksum.
    pub fn to_byte(self) -> u8 {
        match self {
            Self::MainnetSingleSig => 22,
            Self::MainnetMultiSig => 20,
            Self::TestnetSingleSig => 26,
            Self::TestnetMultiSig => 21,
        }
    }

    pub fn is_mainnet(self) -> bool { matches!(self, Self::MainnetSingleSig | Self::MainnetMultiSig) }
}

/// Account address (standard principal) in its c32check string form.
///
/// Parsing decodes the c32 body into the account hash160 followed by a 4-byte checksum and
/// verifies the checksum, so a mistyped address is rejected.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display)]
#[display(inner)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(try_from = "String", into = "String"))]
pub struct StandardPrincipal(String);

impl StandardPrincipal {
    pub fn version(&self) -> AddressVersion {
        self.0
            .chars()
            .nth(1)
            .and_then(AddressVersion::from_char)
            .expect("address version is checked on construction")
    }

    pub fn is_mainnet(&self) -> bool { self.version().is_mainnet() }

    pub fn as_str(&self) -> &str { &self.0 }
}

impl FromStr for StandardPrincipal {
    type Err = PrincipalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let addr = s.trim().to_ascii_uppercase();
        let mut chars = addr.chars();
        if chars.next() != Some('S') {
            return Err(PrincipalError::Prefix(s.to_owned()));
        }
        let version = match chars.next() {
            Some(c) => AddressVersion::from_char(c).ok_or_else(|| PrincipalError::Version(s.to_owned(), c))?,
            None => return Err(PrincipalError::Length(s.to_owned())),
        };
        let payload = c32_decode(chars.as_str()).map_err(|c| PrincipalError::Alphabet(s.to_owned(), c))?;
        if payload.len() != HASH160_LEN + CHECKSUM_LEN {
            return Err(PrincipalError::Length(s.to_owned()));
        }
        let (hash, checksum) = payload.split_at(HASH160_LEN);
        if checksum != c32_checksum(version, hash).as_slice() {
            return Err(PrincipalError::Checksum(s.to_owned()));
        }
        Ok(Self(addr))
    }
}

/// Decodes c32 text into bytes. Each leading `0` character stands for a leading zero byte.
fn c32_decode(s: &str) -> Result<Vec<u8>, char> {
    let zeros = s.chars().take_while(|c| *c == '0').count();
    let mut bytes = Vec::with_capacity(s.len() * 5 / 8 + 1);
    let mut carry = 0u16;
    let mut bits = 0u8;
    for c in s.chars().rev() {
        let code = C32_ALPHABET.find(c).ok_or(c)? as u16;
        carry |= code << bits;
        bits += 5;
        if bits >= 8 {
            bytes.push(carry as u8);
            carry >>= 8;
            bits -= 8;
        }
    }
    if bits > 0 {
        bytes.push(carry as u8);
    }
    while bytes.last() == Some(&0) {
        bytes.pop();
    }
    bytes.extend(core::iter::repeat(0).take(zeros));
    bytes.reverse();
    Ok(bytes)
}

fn c32_checksum(version: AddressVersion, hash: &[u8]) -> [u8; CHECKSUM_LEN] {
    let mut engine = Sha256::new();
    engine.update([version.to_byte()]);
    engine.update(hash);
    let digest = Sha256::digest(engine.finalize());
    let mut checksum = [0u8; CHECKSUM_LEN];
    checksum.copy_from_slice(&digest[..CHECKSUM_LEN]);
    checksum
}

impl TryFrom<String> for StandardPrincipal {
    type Error = PrincipalError;

    fn try_from(value: String) -> Result<Self, Self::Error> { Self::from_str(&value) }
}

impl From<StandardPrincipal> for String {
    fn from(value: StandardPrincipal) -> Self { value.0 }
}

/// Contract deployed under an account: `ADDRESS.contract-name`.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display)]
#[display("{address}.{name}")]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(try_from = "String", into = "String"))]
pub struct ContractPrincipal {
    pub address: StandardPrincipal,
    pub name: ContractName,
}

impl ContractPrincipal {
    pub fn new(address: StandardPrincipal, name: ContractName) -> Self { Self { address, name } }
}

impl FromStr for ContractPrincipal {
    type Err = PrincipalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (address, name) = s
            .trim()
            .split_once('.')
            .ok_or_else(|| PrincipalError::NoContractName(s.to_owned()))?;
        Ok(Self { address: address.parse()?, name: name.parse()? })
    }
}

impl TryFrom<String> for ContractPrincipal {
    type Error = PrincipalError;

    fn try_from(value: String) -> Result<Self, Self::Error> { Self::from_str(&value) }
}

impl From<ContractPrincipal> for String {
    fn from(value: ContractPrincipal) -> Self { value.to_string() }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug, Display, From)]
#[display(inner)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(try_from = "String", into = "String"))]
pub enum Principal {
    #[from]
    Standard(StandardPrincipal),

    #[from]
    Contract(ContractPrincipal),
}

impl Principal {
    /// Account holding the principal: the principal itself or the deployer of the contract.
    pub fn address(&self) -> &StandardPrincipal {
        match self {
            Principal::Standard(addr) => addr,
            Principal::Contract(contract) => &contract.address,
        }
    }
}

impl FromStr for Principal {
    type Err = PrincipalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains('.') {
            ContractPrincipal::from_str(s).map(Self::Contract)
        } else {
            StandardPrincipal::from_str(s).map(Self::Standard)
        }
    }
}

impl TryFrom<String> for Principal {
    type Error = PrincipalError;

    fn try_from(value: String) -> Result<Self, Self::Error> { Self::from_str(&value) }
}

impl From<Principal> for String {
    fn from(value: Principal) -> Self { value.to_string() }
}
