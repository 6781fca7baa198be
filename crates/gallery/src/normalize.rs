// SPDX-FileCopyrightText: 2025 NFT Gallery Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Item normalization
//!
//! Turns one raw upstream record into a canonical [`Item`]: strips the hex
//! prefix from the token id exactly once, resolves display fields through
//! explicit precedence chains, and attaches the synthetic market fields.
//! Pure except for the two explicitly randomized fields (price, listed flag).

use std::sync::Arc;

use indexer_client::{RawItem, RawItemMetadata};
use serde_json::Value;
use shared_types::{Attribute, Collection, Item, ItemMetadata};
use thiserror::Error;

use crate::market::{MarketData, PriceBand};

/// Reasons a raw record cannot be normalized
///
/// A record failing normalization is dropped from its batch; it never aborts
/// the surrounding operation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    /// The record carries no token id
    #[error("record has no token id")]
    MissingTokenId,
    /// The record carries no contract address
    #[error("record has no contract address")]
    MissingContractAddress,
}

/// Strip the upstream `0x` prefix from an identifier, exactly once
pub fn strip_hex_prefix(id: &str) -> &str {
    id.strip_prefix("0x").unwrap_or(id)
}

/// Add the upstream-required `0x` prefix to an identifier if absent
pub fn ensure_hex_prefix(id: &str) -> String {
    if id.starts_with("0x") {
        id.to_string()
    } else {
        format!("0x{id}")
    }
}

/// First candidate that is present and non-empty
///
/// The shared fallback utility behind every precedence chain; call sites list
/// their candidates in precedence order.
pub fn first_filled<'a>(candidates: &[Option<&'a str>]) -> Option<&'a str> {
    candidates
        .iter()
        .find_map(|candidate| candidate.filter(|value| !value.trim().is_empty()))
}

/// Normalize one raw upstream record into a canonical item
///
/// Precedence chains:
/// - name: metadata name, upstream title, synthesized `Item #<tokenId>`
/// - image: metadata image, first media gateway URL, empty string
///
/// # Errors
///
/// Returns an error when the record lacks a token id or contract address;
/// every other absence resolves to a fallback.
pub fn normalize(
    raw: &RawItem,
    collection: &Arc<Collection>,
    market: &dyn MarketData,
    band: PriceBand,
    owner: Option<&str>,
) -> Result<Item, NormalizeError> {
    let token_id = raw
        .id
        .token_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or(NormalizeError::MissingTokenId)?;
    let token_id = strip_hex_prefix(token_id).to_string();

    let contract_address = raw
        .contract
        .address
        .as_deref()
        .filter(|address| !address.is_empty())
        .ok_or(NormalizeError::MissingContractAddress)?
        .to_string();

    let metadata = raw.metadata.as_ref().map(convert_metadata);

    let synthesized = format!("Item #{token_id}");
    let name = first_filled(&[
        metadata.as_ref().and_then(|m| m.name.as_deref()),
        raw.title.as_deref(),
    ])
    .unwrap_or(&synthesized)
    .to_string();

    let first_gateway = raw
        .media
        .iter()
        .find_map(|media| media.gateway.as_deref().filter(|url| !url.is_empty()));
    let image_url = first_filled(&[
        metadata.as_ref().and_then(|m| m.image.as_deref()),
        first_gateway,
    ])
    .unwrap_or_default()
    .to_string();

    let token_uri = raw
        .token_uri
        .as_ref()
        .and_then(|uri| first_filled(&[uri.raw.as_deref(), uri.gateway.as_deref()]))
        .unwrap_or_default()
        .to_string();

    Ok(Item {
        contract_address,
        token_id,
        name,
        symbol: collection.symbol.clone(),
        token_uri,
        metadata,
        owner: owner.map(str::to_string),
        price_eth: market.quote(band),
        listed: market.listed(band),
        image_url,
        collection: Arc::clone(collection),
    })
}

fn convert_metadata(raw: &RawItemMetadata) -> ItemMetadata {
    let attributes = raw
        .attributes
        .iter()
        .filter_map(|attribute| {
            let trait_type = attribute.trait_type.clone()?;
            let value = match &attribute.value {
                Some(Value::String(s)) => s.clone(),
                Some(other) => other.to_string(),
                None => String::new(),
            };
            Some(Attribute { trait_type, value })
        })
        .collect();

    ItemMetadata {
        name: raw.name.clone(),
        description: raw.description.clone(),
        image: raw.image.clone(),
        attributes,
    }
}
