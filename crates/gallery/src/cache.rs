// SPDX-FileCopyrightText: 2025 NFT Gallery Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Collection cache
//!
//! An optional in-memory TTL cache for [`Collection`] records keyed by
//! `(address, network)`. The engine works correctly with the cache absent or
//! empty; it only saves repeated upstream metadata calls within the TTL.

use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::{Duration, Instant},
};

use dashmap::DashMap;
use shared_types::{Collection, Network};
use tracing::{debug, trace};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    address: String,
    network: Network,
}

impl CacheKey {
    fn new(address: &str, network: Network) -> Self {
        // Hex addresses compare case-insensitively upstream.
        Self {
            address: address.to_ascii_lowercase(),
            network,
        }
    }
}

#[derive(Debug, Clone)]
struct CachedCollection {
    collection: Collection,
    cached_at: Instant,
    last_access: Instant,
}

impl CachedCollection {
    fn is_valid(&self, ttl: Duration) -> bool {
        self.cached_at.elapsed() < ttl
    }
}

/// Bounded TTL cache for collection records
#[derive(Debug)]
pub struct CollectionCache {
    entries: DashMap<CacheKey, CachedCollection>,
    ttl: Duration,
    max_entries: usize,
    hits: AtomicU64,
    misses: AtomicU64,
}

/// Cache hit/miss counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Current entry count
    pub entries: usize,
    /// Lookup hits
    pub hits: u64,
    /// Lookup misses
    pub misses: u64,
}

impl CollectionCache {
    /// Create a cache with the given TTL and capacity
    pub fn new(ttl: Duration, max_entries: usize) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
            max_entries: max_entries.max(1),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Look up a cached collection, removing it if expired
    pub fn get(&self, address: &str, network: Network) -> Option<Collection> {
        let key = CacheKey::new(address, network);
        if let Some(mut cached) = self.entries.get_mut(&key) {
            if cached.is_valid(self.ttl) {
                cached.last_access = Instant::now();
                self.hits.fetch_add(1, Ordering::Relaxed);
                trace!(address, %network, "collection cache hit");
                return Some(cached.collection.clone());
            }
            drop(cached);
            self.entries.remove(&key);
            debug!(address, %network, "expired collection cache entry removed");
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    /// Store a collection record, evicting the least recently used entry at
    /// capacity
    pub fn store(&self, network: Network, collection: &Collection) {
        let key = CacheKey::new(&collection.address, network);
        if self.entries.len() >= self.max_entries && !self.entries.contains_key(&key) {
            self.evict_lru();
        }
        let now = Instant::now();
        self.entries.insert(
            key,
            CachedCollection {
                collection: collection.clone(),
                cached_at: now,
                last_access: now,
            },
        );
    }

    /// Drop every cached entry
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Current counters
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    fn evict_lru(&self) {
        let lru = self
            .entries
            .iter()
            .min_by_key(|entry| entry.value().last_access)
            .map(|entry| entry.key().clone());
        if let Some(key) = lru {
            self.entries.remove(&key);
            debug!(address = %key.address, network = %key.network, "evicted lru collection cache entry");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use shared_types::Collection;

    use super::*;

    fn collection(address: &str) -> Collection {
        Collection::placeholder(address)
    }

    #[test]
    fn store_and_get() {
        let cache = CollectionCache::new(Duration::from_secs(60), 16);
        assert!(cache.get("0xA", Network::Mainnet).is_none());

        cache.store(Network::Mainnet, &collection("0xA"));
        let hit = cache.get("0xA", Network::Mainnet).unwrap();
        assert_eq!(hit.address, "0xA");

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
    }

    #[test]
    fn keys_are_address_case_insensitive_and_network_scoped() {
        let cache = CollectionCache::new(Duration::from_secs(60), 16);
        cache.store(Network::Mainnet, &collection("0xAbCd"));

        assert!(cache.get("0xABCD", Network::Mainnet).is_some());
        assert!(cache.get("0xabcd", Network::Sepolia).is_none());
    }

    #[test]
    fn entries_expire_after_ttl() {
        let cache = CollectionCache::new(Duration::from_millis(10), 16);
        cache.store(Network::Mainnet, &collection("0xA"));
        assert!(cache.get("0xA", Network::Mainnet).is_some());

        thread::sleep(Duration::from_millis(15));
        assert!(cache.get("0xA", Network::Mainnet).is_none());
        assert_eq!(cache.stats().entries, 0);
    }

    #[test]
    fn lru_eviction_at_capacity() {
        let cache = CollectionCache::new(Duration::from_secs(60), 2);
        cache.store(Network::Mainnet, &collection("0xA"));
        cache.store(Network::Mainnet, &collection("0xB"));

        // Touch 0xA so 0xB becomes the eviction candidate.
        thread::sleep(Duration::from_millis(2));
        assert!(cache.get("0xA", Network::Mainnet).is_some());

        cache.store(Network::Mainnet, &collection("0xC"));
        assert_eq!(cache.stats().entries, 2);
        assert!(cache.get("0xA", Network::Mainnet).is_some());
        assert!(cache.get("0xB", Network::Mainnet).is_none());
        assert!(cache.get("0xC", Network::Mainnet).is_some());
    }
}
