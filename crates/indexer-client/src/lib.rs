// SPDX-FileCopyrightText: 2025 NFT Gallery Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Client trait and wire types for upstream NFT indexing APIs
//!
//! This crate defines the seam between the aggregation layer and any concrete
//! upstream client: the [`NftIndexApi`] trait, the raw wire types the upstream
//! returns, and the [`IndexerError`] taxonomy for upstream faults.
//!
//! # Design
//!
//! - **Async-first**: all operations return `impl Future` so implementations
//!   stay free of boxing and test fakes stay trivial to write.
//! - **Tolerant wire types**: beyond the identity fields, every field of the
//!   upstream JSON is optional. A missing field deserializes to absence; it is
//!   never a fault (the aggregation layer resolves absence to fallbacks).
//! - **Error classification**: [`IndexerError`] distinguishes transport,
//!   status, rate-limit, authentication, and decode failures so callers can
//!   log precisely, even though the aggregation layer ultimately absorbs all
//!   of them.

use shared_types::Network;
use thiserror::Error;

pub mod types;

pub use types::*;

/// Interface to an upstream NFT indexing API
///
/// One implementation exists per upstream provider; the aggregation engine is
/// generic over this trait and tests substitute a canned fake.
pub trait NftIndexApi: Send + Sync {
    /// Fetch the items owned by an address
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the upstream answers with a
    /// non-success status, or the body cannot be decoded.
    fn owned_items(
        &self,
        owner: &str,
        network: Network,
    ) -> impl Future<Output = Result<OwnedItemsPage, IndexerError>> + Send;

    /// Fetch up to `limit` items of one collection, metadata included
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the upstream answers with a
    /// non-success status, or the body cannot be decoded.
    fn collection_items(
        &self,
        contract_address: &str,
        network: Network,
        limit: u32,
    ) -> impl Future<Output = Result<CollectionItemsPage, IndexerError>> + Send;

    /// Fetch the metadata of a single item
    ///
    /// The token id must carry the upstream-required hex prefix; callers
    /// normalize before invoking this.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the upstream answers with a
    /// non-success status, or the body cannot be decoded.
    fn item_metadata(
        &self,
        contract_address: &str,
        token_id: &str,
        network: Network,
    ) -> impl Future<Output = Result<RawItem, IndexerError>> + Send;

    /// Fetch collection-level metadata for a contract
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the upstream answers with a
    /// non-success status, or the body cannot be decoded.
    fn collection_metadata(
        &self,
        contract_address: &str,
        network: Network,
    ) -> impl Future<Output = Result<RawCollectionMetadata, IndexerError>> + Send;
}

/// Faults originating from an upstream indexing API
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum IndexerError {
    /// HTTP transport failed
    #[error("HTTP request failed: {message}")]
    Http { message: String },

    /// Upstream answered with a non-success status
    #[error("upstream returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body could not be decoded
    #[error("invalid response body: {message}")]
    InvalidResponse { message: String },

    /// Rate limit exceeded
    #[error("rate limit exceeded, retry after {retry_after_seconds} seconds")]
    RateLimited { retry_after_seconds: u64 },

    /// Authentication failed
    #[error("authentication failed: {message}")]
    Unauthorized { message: String },

    /// Request exceeded the client timeout
    #[error("request timed out after {timeout_seconds} seconds")]
    Timeout { timeout_seconds: u64 },

    /// Client misconfiguration
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// Provider-specific error
    #[error(transparent)]
    Custom { error: anyhow::Error },
}
