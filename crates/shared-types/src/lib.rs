// SPDX-FileCopyrightText: 2025 NFT Gallery Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Shared domain types for the NFT gallery core
//!
//! This crate holds the types that cross crate boundaries: the logical
//! [`Network`] identifier, the normalized domain models ([`Collection`],
//! [`Item`], [`Attribute`]) that the aggregation layer produces for its
//! consumers, and the ephemeral query parameters ([`ItemQuery`]) consumers
//! pass back in.
//!
//! Everything here is plain data: no I/O, no global state, no mutation
//! methods. Records are constructed by the aggregation layer, handed to the
//! consumer, and discarded at the call boundary.

pub mod models;
pub mod network;
pub mod query;

pub use models::*;
pub use network::Network;
pub use query::*;
