// SPDX-FileCopyrightText: 2025 NFT Gallery Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Logical network identifiers
//!
//! Network selection is advisory UI state rather than a correctness-critical
//! input, so parsing fails closed: an unrecognized name resolves to
//! [`Network::Mainnet`] instead of erroring.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Supported logical networks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Network {
    /// Ethereum mainnet
    #[default]
    Mainnet,
    /// Ethereum Sepolia testnet
    Sepolia,
    /// Polygon PoS mainnet
    Polygon,
}

impl Network {
    /// Returns the lowercase logical name of the network
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Sepolia => "sepolia",
            Self::Polygon => "polygon",
        }
    }

    /// Returns the upstream API subdomain for this network
    pub const fn indexer_subdomain(self) -> &'static str {
        match self {
            Self::Mainnet => "eth-mainnet",
            Self::Sepolia => "eth-sepolia",
            Self::Polygon => "polygon-mainnet",
        }
    }

    /// Returns all supported networks
    pub const fn all() -> &'static [Self] {
        &[Self::Mainnet, Self::Sepolia, Self::Polygon]
    }

    /// Parse a logical network name, returning `None` for unknown names
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "mainnet" | "eth-mainnet" | "ethereum" => Some(Self::Mainnet),
            "sepolia" | "eth-sepolia" => Some(Self::Sepolia),
            "polygon" | "polygon-mainnet" | "matic" => Some(Self::Polygon),
            _ => None,
        }
    }

    /// Parse a logical network name, failing closed to mainnet
    pub fn from_name_or_default(name: &str) -> Self {
        Self::from_name(name).unwrap_or_default()
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.name().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name_or_default(&name))
    }
}
