// SPDX-FileCopyrightText: 2025 NFT Gallery Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Alchemy-style NFT indexing API client
//!
//! This crate implements the [`indexer_client::NftIndexApi`] trait against an
//! Alchemy-style NFT HTTP API: `getNFTs`, `getNFTsForCollection`,
//! `getNFTMetadata`, and `getContractMetadata`, all returning JSON.
//!
//! The client maps upstream failures onto the [`indexer_client::IndexerError`]
//! taxonomy and never interprets a missing JSON field as a fault; tolerance to
//! partially-populated records lives in the wire types themselves.

pub mod alchemy;

pub use alchemy::*;
