// SPDX-FileCopyrightText: 2025 NFT Gallery Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Faults surfaced to callers of the aggregation layer
//!
//! Only two fault classes exist at this boundary: structurally invalid
//! requests (surfaced synchronously) and configuration failures at startup.
//! Upstream faults never appear here; they are absorbed per the degradation
//! policy and observable only through the `tracing` side-channel.

use thiserror::Error;

/// Faults the aggregation layer surfaces to its callers
#[derive(Debug, Error)]
pub enum GalleryError {
    /// The caller passed a structurally invalid request
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong with the request
        message: String,
    },

    /// Configuration could not be loaded or validated
    #[error("configuration error: {message}")]
    Config {
        /// What was wrong with the configuration
        message: String,
    },
}

/// Result type for aggregation-layer operations
pub type GalleryResult<T> = Result<T, GalleryError>;

/// Require a non-empty argument, naming the field in the fault
pub fn require_arg(name: &str, value: &str) -> GalleryResult<()> {
    if value.trim().is_empty() {
        return Err(GalleryError::InvalidArgument {
            message: format!("{name} must not be empty"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_arg_rejects_empty_and_whitespace() {
        assert!(require_arg("tokenId", "").is_err());
        assert!(require_arg("tokenId", "   ").is_err());
        assert!(require_arg("tokenId", "42").is_ok());
    }

    #[test]
    fn invalid_argument_names_the_field() {
        let error = require_arg("buyerAddress", "").unwrap_err();
        assert!(error.to_string().contains("buyerAddress"));
    }
}
