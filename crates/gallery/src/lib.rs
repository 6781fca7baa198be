// SPDX-FileCopyrightText: 2025 NFT Gallery Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! NFT aggregation and query layer
//!
//! Turns a paginated, rate-limited upstream indexing API into simple
//! collection-level queries over normalized records. The engine fans out over
//! a per-network catalog of well-known collections, absorbs partial upstream
//! failure, and enriches every item with synthetic market data. The only
//! fault surfaced to callers is an invalid argument; everything else degrades
//! to an empty result.
//!
//! Mutations are simulations: [`ActionSimulator`] validates, sleeps, and
//! fabricates a receipt without touching any chain.

pub mod actions;
pub mod cache;
pub mod collections;
pub mod config;
pub mod engine;
pub mod error;
pub mod market;
pub mod networks;
pub mod normalize;
pub mod query;
pub mod settle;

pub use actions::{ActionSimulator, SimulatedTx};
pub use cache::{CacheStats, CollectionCache};
pub use config::GalleryConfig;
pub use engine::GalleryEngine;
pub use error::{GalleryError, GalleryResult};
pub use market::{MarketData, PriceBand, SyntheticMarket};
pub use networks::{CatalogEntry, NetworkRegistry};
