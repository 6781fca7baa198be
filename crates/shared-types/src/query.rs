// SPDX-FileCopyrightText: 2025 NFT Gallery Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Ephemeral per-call query parameters
//!
//! Consumers build an [`ItemQuery`] per request; the aggregation layer applies
//! it in memory over a fetched item set. Nothing here is persisted.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Sort key for item listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Synthetic price, compared numerically
    Price,
    /// Display name, compared lexicographically
    Name,
    /// Token id, compared lexicographically
    TokenId,
}

/// Sort direction for item listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Smallest first
    #[default]
    Ascending,
    /// Largest first
    Descending,
}

/// Filter, sort, and pagination parameters for one listing call
///
/// Trait filters are multi-select: values selected under the same trait name
/// are a union, distinct trait names intersect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemQuery {
    /// 1-based page number
    pub page: usize,
    /// Items per page
    pub page_size: usize,
    /// Sort key, `None` preserves the incoming order
    pub sort: Option<SortKey>,
    /// Sort direction, ignored when `sort` is `None`
    pub direction: SortDirection,
    /// Case-insensitive substring filter over item names
    pub text: Option<String>,
    /// Selected trait values keyed by trait name
    pub traits: BTreeMap<String, BTreeSet<String>>,
}

impl Default for ItemQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 20,
            sort: None,
            direction: SortDirection::Ascending,
            text: None,
            traits: BTreeMap::new(),
        }
    }
}

impl ItemQuery {
    /// Query for one page with default page size and no filters
    pub fn page(page: usize) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    /// Set the sort key and direction
    pub fn sorted(mut self, key: SortKey, direction: SortDirection) -> Self {
        self.sort = Some(key);
        self.direction = direction;
        self
    }

    /// Add a selected value for a trait name
    pub fn with_trait(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.traits.entry(name.into()).or_default().insert(value.into());
        self
    }
}
