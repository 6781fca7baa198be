// SPDX-FileCopyrightText: 2025 NFT Gallery Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Normalized domain models produced by the aggregation layer
//!
//! The invariant across all of these types is that identity fields are always
//! present and every other field is defined: absence upstream is resolved to a
//! deterministic placeholder before a record leaves the aggregation layer,
//! never surfaced as `null` to the consumer.

use std::sync::Arc;

use serde::Serialize;

/// Display name used when a collection's metadata carries no name
pub const FALLBACK_COLLECTION_NAME: &str = "Unknown Collection";

/// Symbol used when a collection's metadata carries no symbol
pub const FALLBACK_COLLECTION_SYMBOL: &str = "NFT";

/// Sentinel total-supply string used when the supply is unknown
pub const UNKNOWN_SUPPLY: &str = "?";

/// A collection of items sharing one contract address
///
/// The contract address is the canonical identity; every other field may hold
/// a placeholder value but is never absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collection {
    /// Contract address, the canonical identity of the collection
    pub address: String,
    /// Display name
    pub name: String,
    /// Ticker-style symbol
    pub symbol: String,
    /// Total supply as reported upstream; [`UNKNOWN_SUPPLY`] when unknown
    pub total_supply: String,
    /// Item count derived from the total supply, 0 when unknown
    pub item_count: u64,
    /// Primary image URL, empty when unavailable
    pub image_url: String,
    /// Banner image URL, empty when unavailable
    pub banner_url: String,
    /// Free-text description, empty when unavailable
    pub description: String,
}

impl Collection {
    /// Synthetic default record for a contract whose metadata could not be
    /// fetched
    ///
    /// Callers of the collection info fetcher are required to fall back to
    /// this record when the fetch returns `None`.
    pub fn placeholder(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            name: FALLBACK_COLLECTION_NAME.to_string(),
            symbol: FALLBACK_COLLECTION_SYMBOL.to_string(),
            total_supply: UNKNOWN_SUPPLY.to_string(),
            item_count: 0,
            image_url: String::new(),
            banner_url: String::new(),
            description: String::new(),
        }
    }
}

/// A single trait (name, value) pair scoped to one item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    /// Trait name, e.g. `"Background"`
    pub trait_type: String,
    /// Trait value, e.g. `"Aquamarine"`
    pub value: String,
}

/// Parsed item metadata, present when the upstream record carried any
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct ItemMetadata {
    /// Metadata-level name, preferred over the upstream title
    pub name: Option<String>,
    /// Free-text description
    pub description: Option<String>,
    /// Metadata-level image URL, preferred over media gateways
    pub image: Option<String>,
    /// Trait list, empty when the metadata carries none
    pub attributes: Vec<Attribute>,
}

/// One token instance within a collection
///
/// Identity is the (contract address, token id) pair. The token id is stored
/// without the upstream hex prefix. The item holds a read-only reference to
/// its owning [`Collection`]; the collection record itself is owned by the
/// aggregation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    /// Contract address of the owning collection
    pub contract_address: String,
    /// Token id with the upstream hex prefix stripped
    pub token_id: String,
    /// Display name
    pub name: String,
    /// Symbol, falling back to the collection symbol
    pub symbol: String,
    /// Raw metadata URI as reported upstream, empty when unavailable
    pub token_uri: String,
    /// Parsed metadata, `None` when the upstream record carried none
    pub metadata: Option<ItemMetadata>,
    /// Owning address, `None` outside owner queries
    pub owner: Option<String>,
    /// Synthetic ETH-denominated price, four decimal places
    pub price_eth: String,
    /// Synthetic listed-for-sale flag
    pub listed: bool,
    /// Resolved image URL, empty when unavailable
    pub image_url: String,
    /// Back-reference to the owning collection
    pub collection: Arc<Collection>,
}
