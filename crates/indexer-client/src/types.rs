// SPDX-FileCopyrightText: 2025 NFT Gallery Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Raw wire types for upstream NFT indexing responses
//!
//! Field names mirror the upstream JSON (camelCase, with the OpenSea-style
//! `trait_type` exception inside metadata attributes). Only the well-known
//! field paths the aggregation layer consumes are modeled; unknown fields are
//! ignored on deserialization.

use serde::Deserialize;

/// One raw item record as returned by the upstream indexer
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RawItem {
    /// Token identity wrapper
    pub id: RawTokenId,
    /// Owning contract wrapper
    pub contract: RawContract,
    /// Upstream display title
    pub title: Option<String>,
    /// Upstream description
    pub description: Option<String>,
    /// Raw metadata URI
    pub token_uri: Option<RawTokenUri>,
    /// Media renditions with gateway URLs
    pub media: Vec<RawMedia>,
    /// Parsed token metadata, when the upstream resolved it
    pub metadata: Option<RawItemMetadata>,
}

/// Token identity wrapper (`id.tokenId`)
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RawTokenId {
    /// Hex-prefixed token id
    pub token_id: Option<String>,
}

/// Owning contract wrapper (`contract.address`)
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RawContract {
    /// Contract address
    pub address: Option<String>,
}

/// Metadata URI wrapper (`tokenUri.{raw,gateway}`)
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RawTokenUri {
    /// Original URI
    pub raw: Option<String>,
    /// Gateway-resolved URI
    pub gateway: Option<String>,
}

/// One media rendition (`media[].gateway`)
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RawMedia {
    /// Gateway-resolved URL
    pub gateway: Option<String>,
    /// Original URL
    pub raw: Option<String>,
}

/// Parsed token metadata (`metadata.{name,description,image,attributes}`)
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawItemMetadata {
    /// Metadata-level name
    pub name: Option<String>,
    /// Metadata-level description
    pub description: Option<String>,
    /// Metadata-level image URL
    pub image: Option<String>,
    /// Trait list; values may be any JSON scalar upstream
    pub attributes: Vec<RawAttribute>,
}

/// One metadata attribute, OpenSea-style `trait_type`/`value`
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawAttribute {
    /// Trait name
    pub trait_type: Option<String>,
    /// Trait value, stringified during normalization
    pub value: Option<serde_json::Value>,
}

/// Response page for the owned-items endpoint
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct OwnedItemsPage {
    /// Items owned by the queried address
    pub owned_nfts: Vec<RawItem>,
    /// Total owned count, when the upstream reports it
    pub total_count: Option<u64>,
    /// Opaque continuation token
    pub page_key: Option<String>,
}

/// Response page for the items-by-collection endpoint
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CollectionItemsPage {
    /// Items of the queried collection
    pub nfts: Vec<RawItem>,
    /// Opaque continuation token
    pub next_token: Option<String>,
}

/// Response for the collection-metadata endpoint
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RawCollectionMetadata {
    /// Contract address echoed by the upstream
    pub address: Option<String>,
    /// Contract-level metadata fields
    pub contract_metadata: RawContractFields,
}

/// Contract-level metadata fields (`contractMetadata.*`)
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RawContractFields {
    /// Collection name
    pub name: Option<String>,
    /// Collection symbol
    pub symbol: Option<String>,
    /// Total supply as a decimal string
    pub total_supply: Option<String>,
    /// Token standard, e.g. `"ERC721"`
    pub token_type: Option<String>,
    /// Marketplace-sourced presentation fields
    pub open_sea: Option<RawMarketplaceProfile>,
}

/// Marketplace presentation fields (`contractMetadata.openSea.*`)
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RawMarketplaceProfile {
    /// Collection image URL
    pub image_url: Option<String>,
    /// Collection banner URL
    pub banner_image_url: Option<String>,
    /// Collection description
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn owned_items_page_with_sparse_records() {
        let page: OwnedItemsPage = serde_json::from_value(json!({
            "ownedNfts": [
                {"id": {"tokenId": "0x05"}, "contract": {"address": "0xA"}}
            ]
        }))
        .unwrap();

        assert_eq!(page.owned_nfts.len(), 1);
        let item = &page.owned_nfts[0];
        assert_eq!(item.id.token_id.as_deref(), Some("0x05"));
        assert_eq!(item.contract.address.as_deref(), Some("0xA"));
        assert!(item.title.is_none());
        assert!(item.media.is_empty());
        assert!(item.metadata.is_none());
        assert!(page.page_key.is_none());
    }

    #[test]
    fn missing_fields_are_absence_not_faults() {
        let item: RawItem = serde_json::from_value(json!({})).unwrap();
        assert!(item.id.token_id.is_none());
        assert!(item.contract.address.is_none());

        let metadata: RawItemMetadata = serde_json::from_value(json!({
            "name": "Ape #1",
            "attributes": [
                {"trait_type": "Fur", "value": "Golden"},
                {"value": 42}
            ]
        }))
        .unwrap();
        assert_eq!(metadata.attributes.len(), 2);
        assert!(metadata.attributes[1].trait_type.is_none());
        assert_eq!(metadata.attributes[1].value, Some(json!(42)));
    }

    #[test]
    fn collection_metadata_nested_paths() {
        let raw: RawCollectionMetadata = serde_json::from_value(json!({
            "address": "0xbc4c",
            "contractMetadata": {
                "name": "Bored Ape Yacht Club",
                "symbol": "BAYC",
                "totalSupply": "10000",
                "tokenType": "ERC721",
                "openSea": {
                    "imageUrl": "https://img.example/bayc.png",
                    "description": "10,000 apes"
                }
            }
        }))
        .unwrap();

        assert_eq!(raw.contract_metadata.name.as_deref(), Some("Bored Ape Yacht Club"));
        assert_eq!(raw.contract_metadata.total_supply.as_deref(), Some("10000"));
        let marketplace = raw.contract_metadata.open_sea.unwrap();
        assert_eq!(marketplace.image_url.as_deref(), Some("https://img.example/bayc.png"));
        assert!(marketplace.banner_image_url.is_none());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let page: CollectionItemsPage = serde_json::from_value(json!({
            "nfts": [],
            "nextToken": "abc",
            "somethingNew": {"nested": true}
        }))
        .unwrap();
        assert!(page.nfts.is_empty());
        assert_eq!(page.next_token.as_deref(), Some("abc"));
    }
}
