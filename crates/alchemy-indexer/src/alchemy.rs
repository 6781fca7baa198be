// SPDX-FileCopyrightText: 2025 NFT Gallery Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Alchemy NFT API client implementation
//!
//! One client instance serves every supported network; the endpoint host is
//! derived per request from [`Network::indexer_subdomain`], with an optional
//! override for tests.

use std::time::Duration;

use indexer_client::{
    CollectionItemsPage, IndexerError, NftIndexApi, OwnedItemsPage, RawCollectionMetadata, RawItem,
};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared_types::Network;
use thiserror::Error;
use tokio::time::timeout;
use tracing::{debug, warn};
use url::Url;

/// Configuration for the Alchemy API client
#[derive(Debug, Clone)]
pub struct AlchemyConfig {
    /// API key appended to the endpoint path
    pub api_key: String,
    /// Host override replacing `https://<subdomain>.g.alchemy.com`; used by
    /// tests to point at a mock server
    pub base_url_override: Option<String>,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for AlchemyConfig {
    fn default() -> Self {
        Self {
            api_key: "demo".to_string(),
            base_url_override: None,
            timeout_seconds: 30,
        }
    }
}

/// Errors specific to the Alchemy client
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum AlchemyError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decoded
    #[error("JSON decoding failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Upstream answered with an error status
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Rate limit exceeded
    #[error("rate limit exceeded")]
    RateLimited,

    /// Authentication failed
    #[error("authentication failed")]
    Unauthorized,

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Request timed out
    #[error("request timed out after {seconds} seconds")]
    Timeout { seconds: u64 },
}

impl From<AlchemyError> for IndexerError {
    fn from(value: AlchemyError) -> Self {
        match value {
            AlchemyError::Http(error) => IndexerError::Http {
                message: error.to_string(),
            },
            AlchemyError::Json(error) => IndexerError::InvalidResponse {
                message: error.to_string(),
            },
            AlchemyError::Api { status, message } => IndexerError::Status { status, message },
            AlchemyError::RateLimited => IndexerError::RateLimited {
                retry_after_seconds: 3,
            },
            AlchemyError::Unauthorized => IndexerError::Unauthorized {
                message: value.to_string(),
            },
            AlchemyError::Config(message) => IndexerError::Configuration { message },
            AlchemyError::Timeout { seconds } => IndexerError::Timeout {
                timeout_seconds: seconds,
            },
        }
    }
}

/// Alchemy NFT API client
#[derive(Debug)]
pub struct AlchemyClient {
    client: Client,
    config: AlchemyConfig,
}

impl AlchemyClient {
    /// Create a new Alchemy client
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is empty, the base URL override is not
    /// a valid URL, or the HTTP client cannot be built.
    pub fn new(config: AlchemyConfig) -> Result<Self, AlchemyError> {
        if config.api_key.trim().is_empty() {
            return Err(AlchemyError::Config("API key cannot be empty".to_string()));
        }

        if let Some(ref base) = config.base_url_override {
            Url::parse(base)
                .map_err(|e| AlchemyError::Config(format!("invalid base URL override: {e}")))?;
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("nft-gallery/0.1.0")
            .build()
            .map_err(AlchemyError::Http)?;

        Ok(Self { client, config })
    }

    fn endpoint(&self, network: Network, method: &str) -> String {
        let host = match &self.config.base_url_override {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => format!("https://{}.g.alchemy.com", network.indexer_subdomain()),
        };
        format!("{host}/nft/v2/{}/{method}", self.config.api_key)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, AlchemyError> {
        debug!(url, "issuing upstream indexer request");

        let request = self
            .client
            .get(url)
            .query(query)
            .header("accept", "application/json");

        let response = timeout(
            Duration::from_secs(self.config.timeout_seconds),
            request.send(),
        )
        .await
        .map_err(|_| AlchemyError::Timeout {
            seconds: self.config.timeout_seconds,
        })?
        .map_err(AlchemyError::Http)?;

        match response.status() {
            StatusCode::OK => {
                let body = response.text().await.map_err(AlchemyError::Http)?;
                serde_json::from_str(&body).map_err(AlchemyError::Json)
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(AlchemyError::Unauthorized),
            StatusCode::TOO_MANY_REQUESTS => Err(AlchemyError::RateLimited),
            status => {
                let message = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "unknown error".to_string());
                warn!(status = status.as_u16(), message, "upstream indexer error");
                Err(AlchemyError::Api {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }
}

impl NftIndexApi for AlchemyClient {
    async fn owned_items(
        &self,
        owner: &str,
        network: Network,
    ) -> Result<OwnedItemsPage, IndexerError> {
        let url = self.endpoint(network, "getNFTs");
        let page = self
            .get_json(&url, &[("owner", owner), ("withMetadata", "true")])
            .await?;
        Ok(page)
    }

    async fn collection_items(
        &self,
        contract_address: &str,
        network: Network,
        limit: u32,
    ) -> Result<CollectionItemsPage, IndexerError> {
        let url = self.endpoint(network, "getNFTsForCollection");
        let limit = limit.to_string();
        let page = self
            .get_json(
                &url,
                &[
                    ("contractAddress", contract_address),
                    ("withMetadata", "true"),
                    ("limit", &limit),
                ],
            )
            .await?;
        Ok(page)
    }

    async fn item_metadata(
        &self,
        contract_address: &str,
        token_id: &str,
        network: Network,
    ) -> Result<RawItem, IndexerError> {
        let url = self.endpoint(network, "getNFTMetadata");
        let item = self
            .get_json(
                &url,
                &[("contractAddress", contract_address), ("tokenId", token_id)],
            )
            .await?;
        Ok(item)
    }

    async fn collection_metadata(
        &self,
        contract_address: &str,
        network: Network,
    ) -> Result<RawCollectionMetadata, IndexerError> {
        let url = self.endpoint(network, "getContractMetadata");
        let metadata = self
            .get_json(&url, &[("contractAddress", contract_address)])
            .await?;
        Ok(metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation_success() {
        let client = AlchemyClient::new(AlchemyConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn client_creation_empty_api_key() {
        let config = AlchemyConfig {
            api_key: "  ".to_string(),
            ..Default::default()
        };
        let client = AlchemyClient::new(config);
        assert!(matches!(client.unwrap_err(), AlchemyError::Config(_)));
    }

    #[test]
    fn client_creation_invalid_override() {
        let config = AlchemyConfig {
            base_url_override: Some("not a url".to_string()),
            ..Default::default()
        };
        let client = AlchemyClient::new(config);
        assert!(matches!(client.unwrap_err(), AlchemyError::Config(_)));
    }

    #[test]
    fn endpoint_uses_network_subdomain() {
        let client = AlchemyClient::new(AlchemyConfig {
            api_key: "key123".to_string(),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(
            client.endpoint(Network::Mainnet, "getNFTs"),
            "https://eth-mainnet.g.alchemy.com/nft/v2/key123/getNFTs"
        );
        assert_eq!(
            client.endpoint(Network::Sepolia, "getContractMetadata"),
            "https://eth-sepolia.g.alchemy.com/nft/v2/key123/getContractMetadata"
        );
    }

    #[test]
    fn endpoint_honors_override() {
        let client = AlchemyClient::new(AlchemyConfig {
            api_key: "key123".to_string(),
            base_url_override: Some("http://127.0.0.1:9000/".to_string()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(
            client.endpoint(Network::Mainnet, "getNFTs"),
            "http://127.0.0.1:9000/nft/v2/key123/getNFTs"
        );
    }
}
