// SPDX-FileCopyrightText: 2025 NFT Gallery Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! The aggregation engine
//!
//! Composes the network registry, collection info fetcher, and item
//! normalizer over one upstream client to answer the four query operations:
//! items by owner, browsable listings, single-item detail, and text search.
//!
//! Degradation policy: a fault scoped to one item or one collection branch
//! removes only that contribution; a fault that leaves an operation with no
//! usable data source degrades to an empty list (or `None` for single-item
//! lookups). The only fault surfaced to callers is an invalid argument.
//! Absorbed faults are logged at `warn`.

use std::{collections::HashMap, sync::Arc};

use futures::future::join_all;
use indexer_client::{IndexerError, NftIndexApi};
use shared_types::{Collection, Item, Network};
use tracing::{debug, warn};

use crate::{
    cache::CollectionCache,
    collections::fetch_collection_info,
    error::{GalleryResult, require_arg},
    market::{MarketData, PriceBand, SyntheticMarket},
    networks::{CatalogEntry, NetworkRegistry},
    normalize::{ensure_hex_prefix, normalize},
    settle::settle_all,
};

/// Aggregation engine over one upstream indexing client
///
/// Each operation constructs fresh records; nothing is mutated across calls.
/// The optional collection cache only short-circuits repeated metadata
/// fetches — every operation is correct with the cache absent or empty.
#[derive(Debug)]
pub struct GalleryEngine<C, M = SyntheticMarket> {
    client: C,
    registry: Arc<NetworkRegistry>,
    market: M,
    cache: Option<CollectionCache>,
}

impl<C: NftIndexApi> GalleryEngine<C> {
    /// Engine with entropy-seeded synthetic market data
    pub fn new(client: C, registry: Arc<NetworkRegistry>) -> Self {
        Self::with_market(client, registry, SyntheticMarket::from_entropy())
    }
}

impl<C: NftIndexApi, M: MarketData> GalleryEngine<C, M> {
    /// Engine with an explicit market data capability
    pub fn with_market(client: C, registry: Arc<NetworkRegistry>, market: M) -> Self {
        Self {
            client,
            registry,
            market,
            cache: None,
        }
    }

    /// Attach a collection cache
    pub fn with_cache(mut self, cache: CollectionCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Items owned by an address
    ///
    /// An empty owner is a normal UI state (unconnected wallet), not a fault:
    /// it returns an empty list without issuing any upstream call. Result
    /// order follows the upstream; no ordering is promised.
    pub async fn list_by_owner(&self, owner: &str, network: Network) -> Vec<Item> {
        if owner.trim().is_empty() {
            return Vec::new();
        }

        let page = match self.client.owned_items(owner, network).await {
            Ok(page) => page,
            Err(error) => {
                warn!(owner, %network, %error, "owner query failed; degrading to empty");
                return Vec::new();
            }
        };

        // Resolve each distinct contract once, concurrently.
        let mut distinct: Vec<String> = Vec::new();
        for raw in &page.owned_nfts {
            if let Some(address) = raw.contract.address.as_deref().filter(|a| !a.is_empty()) {
                if !distinct.iter().any(|seen| seen.eq_ignore_ascii_case(address)) {
                    distinct.push(address.to_string());
                }
            }
        }
        let resolved = join_all(distinct.iter().map(|address| async move {
            (
                address.to_ascii_lowercase(),
                self.resolve_collection(address, network).await,
            )
        }))
        .await;
        let collections: HashMap<String, Arc<Collection>> = resolved.into_iter().collect();

        let mut items = Vec::with_capacity(page.owned_nfts.len());
        for raw in &page.owned_nfts {
            let Some(address) = raw.contract.address.as_deref().filter(|a| !a.is_empty()) else {
                warn!(owner, %network, "skipping owned item without contract address");
                continue;
            };
            let collection = collections
                .get(&address.to_ascii_lowercase())
                .cloned()
                .unwrap_or_else(|| Arc::new(Collection::placeholder(address)));
            match normalize(raw, &collection, &self.market, PriceBand::Owned, Some(owner)) {
                Ok(item) => items.push(item),
                Err(error) => {
                    warn!(owner, %network, %error, "skipping owned item that failed normalization");
                }
            }
        }
        items
    }

    /// Up to `limit` browsable items drawn evenly from the network's
    /// well-known collection catalog
    ///
    /// All per-collection fetches run concurrently; output is concatenated in
    /// catalog order regardless of completion order, then truncated to
    /// `limit`.
    pub async fn list_browsable(&self, network: Network, limit: usize) -> Vec<Item> {
        if limit == 0 {
            return Vec::new();
        }
        let catalog = self.registry.catalog(network);
        self.fan_out(catalog.iter().collect(), network, limit, None).await
    }

    /// Single-item lookup
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::InvalidArgument`](crate::GalleryError::InvalidArgument)
    /// when either identifier is empty. Upstream failure is absorbed to
    /// `Ok(None)`: callers must treat `None` as "not found or unavailable".
    pub async fn get_item_detail(
        &self,
        address: &str,
        token_id: &str,
        network: Network,
    ) -> GalleryResult<Option<Item>> {
        require_arg("address", address)?;
        require_arg("tokenId", token_id)?;

        let prefixed = ensure_hex_prefix(token_id.trim());
        let raw = match self.client.item_metadata(address, &prefixed, network).await {
            Ok(raw) => raw,
            Err(error) => {
                warn!(address, token_id, %network, %error, "item detail fetch failed");
                return Ok(None);
            }
        };

        let collection = self.resolve_collection(address, network).await;
        match normalize(&raw, &collection, &self.market, PriceBand::Listed, None) {
            Ok(item) => Ok(Some(item)),
            Err(error) => {
                warn!(address, token_id, %network, %error, "item detail failed normalization");
                Ok(None)
            }
        }
    }

    /// Cross-collection text search
    ///
    /// Matching is two-staged and case-insensitive: the catalog is filtered
    /// by substring match against collection name or symbol, then items of
    /// each matching collection are filtered by substring match against the
    /// item name. Neither stage exempts the other.
    pub async fn search(&self, query: &str, network: Network, limit: usize) -> Vec<Item> {
        let query = query.trim();
        if query.is_empty() || limit == 0 {
            return Vec::new();
        }
        let needle = query.to_lowercase();

        let matching: Vec<&CatalogEntry> = self
            .registry
            .catalog(network)
            .iter()
            .filter(|entry| {
                entry.name.to_lowercase().contains(&needle)
                    || entry.symbol.to_lowercase().contains(&needle)
            })
            .collect();
        if matching.is_empty() {
            debug!(query, %network, "no catalog collection matches");
            return Vec::new();
        }

        self.fan_out(matching, network, limit, Some(&needle)).await
    }

    /// Collection metadata with placeholder fallback
    ///
    /// Never fails: when the upstream metadata cannot be fetched the
    /// synthetic placeholder record for the address is returned instead.
    pub async fn collection_info(&self, address: &str, network: Network) -> Collection {
        (*self.resolve_collection(address, network).await).clone()
    }

    /// Cache counters, when a cache is attached
    pub fn cache_stats(&self) -> Option<crate::cache::CacheStats> {
        self.cache.as_ref().map(CollectionCache::stats)
    }

    /// Concurrent per-collection fetch with quota division and per-branch
    /// failure isolation
    async fn fan_out(
        &self,
        entries: Vec<&CatalogEntry>,
        network: Network,
        limit: usize,
        item_filter: Option<&str>,
    ) -> Vec<Item> {
        if entries.is_empty() {
            return Vec::new();
        }
        let quota = u32::try_from(limit.div_ceil(entries.len())).unwrap_or(u32::MAX);

        let branches = entries.into_iter().map(|entry| {
            (
                entry.address.clone(),
                self.collection_branch(entry, network, quota, item_filter),
            )
        });
        let groups = settle_all(branches).await;

        let mut items: Vec<Item> = groups.into_iter().flatten().collect();
        items.truncate(limit);
        items
    }

    /// One collection's contribution to a fan-out
    async fn collection_branch(
        &self,
        entry: &CatalogEntry,
        network: Network,
        quota: u32,
        item_filter: Option<&str>,
    ) -> Result<Vec<Item>, IndexerError> {
        let collection = self.resolve_collection(&entry.address, network).await;
        let page = self
            .client
            .collection_items(&entry.address, network, quota)
            .await?;

        let mut items = Vec::with_capacity(page.nfts.len());
        for raw in &page.nfts {
            match normalize(raw, &collection, &self.market, PriceBand::Listed, None) {
                Ok(item) => {
                    if let Some(needle) = item_filter {
                        if !item.name.to_lowercase().contains(needle) {
                            continue;
                        }
                    }
                    items.push(item);
                }
                Err(error) => {
                    warn!(address = %entry.address, %network, %error, "skipping item that failed normalization");
                }
            }
        }
        Ok(items)
    }

    /// Collection record for an address, via the cache when attached
    async fn resolve_collection(&self, address: &str, network: Network) -> Arc<Collection> {
        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.get(address, network) {
                return Arc::new(hit);
            }
        }

        let collection = fetch_collection_info(&self.client, address, network)
            .await
            .unwrap_or_else(|| Collection::placeholder(address));

        if let Some(cache) = &self.cache {
            cache.store(network, &collection);
        }
        Arc::new(collection)
    }
}
