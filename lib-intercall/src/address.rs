//! Account and contract addresses
//!
//! Addresses are 20-byte bodies tagged with a kind. The text form is a
//! two-letter prefix (`hx` for accounts, `cx` for contracts) followed by
//! 40 lowercase hex characters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Length of the address body in bytes
pub const ADDRESS_BODY_LEN: usize = 20;

const EOA_PREFIX: &str = "hx";
const CONTRACT_PREFIX: &str = "cx";

/// Whether an address names an externally owned account or a contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AddressKind {
    /// Externally owned account (`hx...`)
    Eoa,
    /// Deployed contract (`cx...`)
    Contract,
}

impl AddressKind {
    /// Text prefix for this kind
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Eoa => EOA_PREFIX,
            Self::Contract => CONTRACT_PREFIX,
        }
    }
}

/// Address parsing errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("invalid address length: expected {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("unknown address prefix: {0}")]
    UnknownPrefix(String),

    #[error("invalid address body: {0}")]
    InvalidHex(String),
}

/// Identifier of an account or contract
///
/// Immutable value type, compared by kind and body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address {
    kind: AddressKind,
    body: [u8; ADDRESS_BODY_LEN],
}

impl Address {
    pub fn new(kind: AddressKind, body: [u8; ADDRESS_BODY_LEN]) -> Self {
        Self { kind, body }
    }

    /// Account address from raw body bytes
    pub fn eoa(body: [u8; ADDRESS_BODY_LEN]) -> Self {
        Self::new(AddressKind::Eoa, body)
    }

    /// Contract address from raw body bytes
    pub fn contract(body: [u8; ADDRESS_BODY_LEN]) -> Self {
        Self::new(AddressKind::Contract, body)
    }

    pub fn kind(&self) -> AddressKind {
        self.kind
    }

    pub fn body(&self) -> &[u8; ADDRESS_BODY_LEN] {
        &self.body
    }

    pub fn is_contract(&self) -> bool {
        self.kind == AddressKind::Contract
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.prefix(), hex::encode(self.body))
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let expected = 2 + ADDRESS_BODY_LEN * 2;
        if s.len() != expected {
            return Err(AddressError::InvalidLength {
                expected,
                actual: s.len(),
            });
        }

        if !s.is_ascii() {
            return Err(AddressError::InvalidHex(s.to_string()));
        }

        let (prefix, body_hex) = s.split_at(2);
        let kind = match prefix {
            EOA_PREFIX => AddressKind::Eoa,
            CONTRACT_PREFIX => AddressKind::Contract,
            other => return Err(AddressError::UnknownPrefix(other.to_string())),
        };

        let mut body = [0u8; ADDRESS_BODY_LEN];
        hex::decode_to_slice(body_hex, &mut body)
            .map_err(|e| AddressError::InvalidHex(e.to_string()))?;

        Ok(Self { kind, body })
    }
}

impl TryFrom<String> for Address {
    type Error = AddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.to_string()
    }
}
