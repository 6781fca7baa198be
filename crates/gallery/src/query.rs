// SPDX-FileCopyrightText: 2025 NFT Gallery Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! In-memory query application
//!
//! Applies an [`ItemQuery`] to an already-fetched item set: text filter, then
//! trait filters, then a stable sort, then 1-based pagination. Also derives
//! the facet map consumers use to render trait filter controls.

use std::collections::{BTreeMap, BTreeSet};

use shared_types::{Item, ItemQuery, SortDirection, SortKey};

/// Apply filters, sorting, and pagination to an item set
///
/// Filtering happens before pagination, so the page is cut from the filtered
/// and sorted set. A page past the end yields an empty list. Sorting is
/// stable: items comparing equal keep their incoming relative order.
pub fn apply(items: Vec<Item>, query: &ItemQuery) -> Vec<Item> {
    let mut items: Vec<Item> = items
        .into_iter()
        .filter(|item| matches_text(item, query.text.as_deref()))
        .filter(|item| matches_traits(item, &query.traits))
        .collect();

    if let Some(key) = query.sort {
        sort_items(&mut items, key, query.direction);
    }

    paginate(items, query.page, query.page_size)
}

/// Derive the facet map for an item set
///
/// Keys are trait names, values the distinct trait values seen across the
/// set, both in sorted order. Items without metadata contribute nothing.
pub fn facets(items: &[Item]) -> BTreeMap<String, BTreeSet<String>> {
    let mut map: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for item in items {
        let Some(metadata) = &item.metadata else {
            continue;
        };
        for attribute in &metadata.attributes {
            map.entry(attribute.trait_type.clone())
                .or_default()
                .insert(attribute.value.clone());
        }
    }
    map
}

fn matches_text(item: &Item, text: Option<&str>) -> bool {
    match text.map(str::trim).filter(|t| !t.is_empty()) {
        Some(needle) => item.name.to_lowercase().contains(&needle.to_lowercase()),
        None => true,
    }
}

/// Values under one trait name union; distinct trait names intersect.
fn matches_traits(item: &Item, traits: &BTreeMap<String, BTreeSet<String>>) -> bool {
    if traits.is_empty() {
        return true;
    }
    let Some(metadata) = &item.metadata else {
        return false;
    };
    traits.iter().all(|(name, selected)| {
        metadata
            .attributes
            .iter()
            .any(|attribute| attribute.trait_type == *name && selected.contains(&attribute.value))
    })
}

fn sort_items(items: &mut [Item], key: SortKey, direction: SortDirection) {
    items.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Price => price_of(a).total_cmp(&price_of(b)),
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::TokenId => a.token_id.cmp(&b.token_id),
        };
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// Prices are formatted by this layer, so the parse only fails on records
/// from outside it; those sort first.
fn price_of(item: &Item) -> f64 {
    item.price_eth.parse().unwrap_or(f64::NEG_INFINITY)
}

fn paginate(items: Vec<Item>, page: usize, page_size: usize) -> Vec<Item> {
    if page_size == 0 {
        return Vec::new();
    }
    let start = page.saturating_sub(1).saturating_mul(page_size);
    items.into_iter().skip(start).take(page_size).collect()
}
