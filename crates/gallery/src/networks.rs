// SPDX-FileCopyrightText: 2025 NFT Gallery Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Network resolution: endpoint bases and well-known collection catalogs
//!
//! The registry is process-wide static configuration: built once at startup,
//! never mutated, and passed by shared reference into the aggregation engine.
//! Unknown network names never reach this module; they fail closed to mainnet
//! at [`Network`] parse time.

use std::collections::HashMap;

use shared_types::Network;

/// One well-known collection in a network's catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Contract address
    pub address: String,
    /// Collection display name
    pub name: String,
    /// Collection symbol
    pub symbol: String,
}

impl CatalogEntry {
    /// Create a catalog entry
    pub fn new(
        address: impl Into<String>,
        name: impl Into<String>,
        symbol: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            name: name.into(),
            symbol: symbol.into(),
        }
    }
}

/// Immutable mapping from logical network to upstream endpoint and catalog
#[derive(Debug)]
pub struct NetworkRegistry {
    catalogs: HashMap<Network, Vec<CatalogEntry>>,
}

impl NetworkRegistry {
    /// Registry with the standard well-known collection catalogs
    pub fn standard() -> Self {
        let mut catalogs = HashMap::new();
        catalogs.insert(
            Network::Mainnet,
            vec![
                CatalogEntry::new(
                    "0xbc4ca0eda7647a8ab7c2061c2e118a18a936f13d",
                    "Bored Ape Yacht Club",
                    "BAYC",
                ),
                CatalogEntry::new(
                    "0x60e4d786628fea6478f785a6d7e704777c86a7c6",
                    "Mutant Ape Yacht Club",
                    "MAYC",
                ),
                CatalogEntry::new(
                    "0x8a90cab2b38dba80c64b7734e58ee1db38b8992e",
                    "Doodles",
                    "DOODLE",
                ),
                CatalogEntry::new(
                    "0xed5af388653567af2f388e6224dc7c4b3241c544",
                    "Azuki",
                    "AZUKI",
                ),
                CatalogEntry::new(
                    "0xbd3531da5cf5857e7cbfda930ab682fb5d285ab9",
                    "Pudgy Penguins",
                    "PPG",
                ),
                CatalogEntry::new(
                    "0x1a92f7381b9f03921564a437210bb9396471050c",
                    "Cool Cats",
                    "COOL",
                ),
            ],
        );
        catalogs.insert(
            Network::Sepolia,
            vec![
                CatalogEntry::new(
                    "0x5180db8f5c931aae63c74266b211f580155ecac8",
                    "Crypto Coven",
                    "WITCH",
                ),
                CatalogEntry::new(
                    "0xfa2a3452d86a9447e361205dff29b1dd441f1821",
                    "Sepolia Apes",
                    "SAPE",
                ),
            ],
        );
        catalogs.insert(
            Network::Polygon,
            vec![
                CatalogEntry::new(
                    "0x2953399124f0cbb46d2cbacd8a89cf0599974963",
                    "OpenSea Collections",
                    "OPENSTORE",
                ),
                CatalogEntry::new(
                    "0x9498274b8c82b4a3127d67839f2127f2ae9753f4",
                    "Voxies",
                    "VOXEL",
                ),
            ],
        );
        Self { catalogs }
    }

    /// Registry with explicit catalogs; networks not listed have an empty
    /// catalog
    pub fn with_catalogs(catalogs: HashMap<Network, Vec<CatalogEntry>>) -> Self {
        Self { catalogs }
    }

    /// The upstream API base endpoint for a network, without credentials
    pub fn endpoint_base(&self, network: Network) -> String {
        format!("https://{}.g.alchemy.com/nft/v2", network.indexer_subdomain())
    }

    /// The ordered well-known collection catalog for a network
    pub fn catalog(&self, network: Network) -> &[CatalogEntry] {
        self.catalogs.get(&network).map_or(&[], Vec::as_slice)
    }
}

impl Default for NetworkRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_network_has_an_endpoint() {
        let registry = NetworkRegistry::standard();
        for &network in Network::all() {
            let base = registry.endpoint_base(network);
            assert!(base.starts_with("https://"));
            assert!(base.contains(network.indexer_subdomain()));
        }
    }

    #[test]
    fn standard_catalogs_are_ordered_and_unique() {
        let registry = NetworkRegistry::standard();
        for &network in Network::all() {
            let catalog = registry.catalog(network);
            assert!(!catalog.is_empty(), "{network} catalog is empty");
            let mut addresses = std::collections::HashSet::new();
            for entry in catalog {
                assert!(entry.address.starts_with("0x"));
                assert!(addresses.insert(&entry.address), "duplicate {}", entry.address);
                assert!(!entry.name.is_empty());
                assert!(!entry.symbol.is_empty());
            }
        }
    }

    #[test]
    fn custom_registry_defaults_to_empty_catalog() {
        let registry = NetworkRegistry::with_catalogs(HashMap::new());
        assert!(registry.catalog(Network::Mainnet).is_empty());
    }
}
