use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use ubi_utils::{error::ValidationError, helpers::normalize_evm_address};

/// A 20-byte account or contract address, always lowercase `0x`-prefixed hex.
///
/// Values coming from messages are plain strings and must go through [`EvmAddress::parse`];
/// deserialization is transparent so that records loaded back from storage are not re-validated.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, JsonSchema)]
#[serde(transparent)]
pub struct EvmAddress(String);

impl EvmAddress {
    pub fn parse(address: &str) -> Result<Self, ValidationError> {
        normalize_evm_address(address).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for EvmAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EvmAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<EvmAddress> for String {
    fn from(address: EvmAddress) -> Self {
        address.0
    }
}
