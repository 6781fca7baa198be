// SPDX-FileCopyrightText: 2025 NFT Gallery Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Collection info fetching
//!
//! Resolves collection metadata for a contract address with a primary
//! metadata call and a secondary one-sample-item call to backfill imagery the
//! metadata omits. The metadata call failing sinks the whole fetch (`None`);
//! the sample call failing only leaves the image fields empty.

use indexer_client::NftIndexApi;
use shared_types::{
    Collection, FALLBACK_COLLECTION_NAME, FALLBACK_COLLECTION_SYMBOL, Network, UNKNOWN_SUPPLY,
};
use tracing::{debug, warn};

use crate::normalize::first_filled;

/// Fetch collection metadata for a contract
///
/// Returns `None` when the metadata request fails; callers are required to
/// substitute [`Collection::placeholder`] in that case. Idempotent and safe
/// to retry: two calls against an unchanged upstream yield equal records.
pub async fn fetch_collection_info<C: NftIndexApi>(
    client: &C,
    address: &str,
    network: Network,
) -> Option<Collection> {
    let metadata = match client.collection_metadata(address, network).await {
        Ok(metadata) => metadata,
        Err(error) => {
            warn!(address, %network, %error, "collection metadata fetch failed");
            return None;
        }
    };

    let fields = metadata.contract_metadata;
    let marketplace = fields.open_sea.unwrap_or_default();

    let total_supply = fields
        .total_supply
        .filter(|supply| !supply.is_empty())
        .unwrap_or_else(|| UNKNOWN_SUPPLY.to_string());
    let item_count = total_supply.parse().unwrap_or(0);

    let mut collection = Collection {
        address: address.to_string(),
        name: fields
            .name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| FALLBACK_COLLECTION_NAME.to_string()),
        symbol: fields
            .symbol
            .filter(|symbol| !symbol.is_empty())
            .unwrap_or_else(|| FALLBACK_COLLECTION_SYMBOL.to_string()),
        total_supply,
        item_count,
        image_url: marketplace.image_url.unwrap_or_default(),
        banner_url: marketplace.banner_image_url.unwrap_or_default(),
        description: marketplace.description.unwrap_or_default(),
    };

    if collection.image_url.is_empty() || collection.banner_url.is_empty() {
        backfill_imagery(client, address, network, &mut collection).await;
    }

    Some(collection)
}

/// Recover imagery from a single sample item when the metadata omits it
///
/// This is an auxiliary call: its failure never sinks the collection.
async fn backfill_imagery<C: NftIndexApi>(
    client: &C,
    address: &str,
    network: Network,
    collection: &mut Collection,
) {
    let page = match client.collection_items(address, network, 1).await {
        Ok(page) => page,
        Err(error) => {
            debug!(address, %network, %error, "sample item fetch failed; keeping empty imagery");
            return;
        }
    };

    let Some(sample) = page.nfts.first() else {
        return;
    };

    let sample_image = first_filled(&[
        sample.metadata.as_ref().and_then(|m| m.image.as_deref()),
        sample
            .media
            .iter()
            .find_map(|media| media.gateway.as_deref().filter(|url| !url.is_empty())),
    ])
    .unwrap_or_default()
    .to_string();

    if collection.image_url.is_empty() {
        collection.image_url.clone_from(&sample_image);
    }
    if collection.banner_url.is_empty() {
        collection.banner_url = sample_image;
    }
}
