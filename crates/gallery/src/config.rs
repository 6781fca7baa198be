// SPDX-FileCopyrightText: 2025 NFT Gallery Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Aggregation-layer configuration
//!
//! Configuration is immutable after loading: defaults, then an optional
//! `gallery` config file, then `GALLERY_*` environment overrides. The loaded
//! value is built once at startup and passed by reference into the engine's
//! collaborators.

use std::time::Duration;

use anyhow::{Result, ensure};
use config::{Config, Environment as ConfigEnv, File};
use serde::{Deserialize, Deserializer, Serialize, de};

use crate::error::GalleryError;

/// A validated request timeout in seconds (range 1-300)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeoutSeconds(u64);

impl TimeoutSeconds {
    /// Create a new `TimeoutSeconds`, ensuring the value is within bounds
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout is 0 or greater than 300 seconds.
    pub fn new(seconds: u64) -> Result<Self> {
        ensure!(seconds != 0, "timeout must be greater than 0");
        ensure!(seconds <= 300, "timeout cannot exceed 300");
        Ok(Self(seconds))
    }

    /// Get the timeout in seconds
    pub const fn seconds(self) -> u64 {
        self.0
    }

    /// Get the timeout as a [`Duration`]
    pub const fn duration(self) -> Duration {
        Duration::from_secs(self.0)
    }
}

impl Default for TimeoutSeconds {
    fn default() -> Self {
        Self(30)
    }
}

impl<'de> Deserialize<'de> for TimeoutSeconds {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let seconds = u64::deserialize(deserializer)?;
        Self::new(seconds).map_err(|e| de::Error::custom(e.to_string()))
    }
}

/// Configuration for the aggregation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Upstream indexer API key
    pub api_key: String,
    /// Upstream request timeout
    pub request_timeout_seconds: TimeoutSeconds,
    /// Default item limit for browse listings
    pub browse_limit: usize,
    /// Collection cache time-to-live in seconds
    pub cache_ttl_seconds: u64,
    /// Collection cache capacity
    pub cache_max_entries: usize,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            api_key: "demo".to_string(),
            request_timeout_seconds: TimeoutSeconds::default(),
            browse_limit: 20,
            cache_ttl_seconds: 300,
            cache_max_entries: 1024,
        }
    }
}

impl GalleryConfig {
    /// Load configuration from the optional `gallery` config file and
    /// `GALLERY_*` environment variables, on top of the defaults
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Config`] when a source cannot be read or a
    /// value fails validation.
    pub fn load() -> Result<Self, GalleryError> {
        let loaded: Self = Config::builder()
            .add_source(File::with_name("gallery").required(false))
            .add_source(ConfigEnv::with_prefix("GALLERY"))
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| GalleryError::Config {
                message: e.to_string(),
            })?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Validate cross-field constraints
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Config`] when a constraint is violated.
    pub fn validate(&self) -> Result<(), GalleryError> {
        if self.browse_limit == 0 {
            return Err(GalleryError::Config {
                message: "browse_limit must be greater than 0".to_string(),
            });
        }
        if self.cache_max_entries == 0 {
            return Err(GalleryError::Config {
                message: "cache_max_entries must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GalleryConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.request_timeout_seconds.seconds(), 30);
        assert_eq!(config.browse_limit, 20);
    }

    #[test]
    fn timeout_bounds() {
        assert!(TimeoutSeconds::new(0).is_err());
        assert!(TimeoutSeconds::new(301).is_err());
        assert_eq!(TimeoutSeconds::new(300).unwrap().seconds(), 300);
        assert_eq!(
            TimeoutSeconds::new(5).unwrap().duration(),
            Duration::from_secs(5)
        );
    }

    #[test]
    fn timeout_deserialization_rejects_out_of_range() {
        assert!(serde_json::from_str::<TimeoutSeconds>("0").is_err());
        assert!(serde_json::from_str::<TimeoutSeconds>("500").is_err());
        let timeout: TimeoutSeconds = serde_json::from_str("60").unwrap();
        assert_eq!(timeout.seconds(), 60);
    }

    #[test]
    fn zero_browse_limit_fails_validation() {
        let config = GalleryConfig {
            browse_limit: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate().unwrap_err(),
            GalleryError::Config { .. }
        ));
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config: GalleryConfig = serde_json::from_str(r#"{"browse_limit": 48}"#).unwrap();
        assert_eq!(config.browse_limit, 48);
        assert_eq!(config.cache_ttl_seconds, 300);
    }
}
