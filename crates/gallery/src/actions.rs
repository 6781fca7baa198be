// SPDX-FileCopyrightText: 2025 NFT Gallery Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Simulated marketplace actions
//!
//! Stand-ins for an on-chain write path. Nothing here touches a ledger: each
//! action validates its arguments, sleeps for the expected confirmation
//! latency, and returns a synthetically generated transaction record.
//! Consumers must treat these as simulations only.

use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use shared_types::Network;
use tokio::time::sleep;
use tracing::info;

use crate::error::{GalleryResult, require_arg};

/// Simulated confirmation latency for a purchase
pub const PURCHASE_DELAY: Duration = Duration::from_millis(2000);

/// Simulated confirmation latency for a listing
pub const LISTING_DELAY: Duration = Duration::from_millis(1500);

/// Receipt for a simulated transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulatedTx {
    /// Synthetic 32-byte transaction id, `0x`-prefixed hex
    pub tx_hash: String,
    /// Network the action was simulated on
    pub network: Network,
    /// Simulated confirmation time
    pub confirmed_at: DateTime<Utc>,
}

/// Simulator for purchase and listing mutations
#[derive(Debug, Default)]
pub struct ActionSimulator;

impl ActionSimulator {
    /// Create a simulator
    pub fn new() -> Self {
        Self
    }

    /// Simulate purchasing an item
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::InvalidArgument`](crate::GalleryError::InvalidArgument)
    /// when any argument is empty.
    pub async fn purchase(
        &self,
        token_id: &str,
        contract_address: &str,
        network: Network,
        buyer_address: &str,
    ) -> GalleryResult<SimulatedTx> {
        require_arg("tokenId", token_id)?;
        require_arg("contractAddress", contract_address)?;
        require_arg("buyerAddress", buyer_address)?;

        sleep(PURCHASE_DELAY).await;
        let receipt = confirm(network);
        info!(token_id, contract_address, buyer_address, tx_hash = %receipt.tx_hash, "simulated purchase");
        Ok(receipt)
    }

    /// Simulate listing an item for sale
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::InvalidArgument`](crate::GalleryError::InvalidArgument)
    /// when any argument is empty.
    pub async fn list_for_sale(
        &self,
        token_id: &str,
        contract_address: &str,
        price_eth: &str,
        owner_address: &str,
        network: Network,
    ) -> GalleryResult<SimulatedTx> {
        require_arg("tokenId", token_id)?;
        require_arg("contractAddress", contract_address)?;
        require_arg("price", price_eth)?;
        require_arg("ownerAddress", owner_address)?;

        sleep(LISTING_DELAY).await;
        let receipt = confirm(network);
        info!(token_id, contract_address, owner_address, price_eth, tx_hash = %receipt.tx_hash, "simulated listing");
        Ok(receipt)
    }
}

fn confirm(network: Network) -> SimulatedTx {
    SimulatedTx {
        tx_hash: synthetic_tx_hash(),
        network,
        confirmed_at: Utc::now(),
    }
}

fn synthetic_tx_hash() -> String {
    let bytes: [u8; 32] = rand::thread_rng().r#gen();
    let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    format!("0x{hex}")
}

#[cfg(test)]
mod tests {
    use tokio::time::Instant;

    use crate::error::GalleryError;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn purchase_returns_receipt_after_delay() {
        let simulator = ActionSimulator::new();
        let started = Instant::now();

        let receipt = simulator
            .purchase("42", "0xA", Network::Mainnet, "0xbuyer")
            .await
            .unwrap();

        assert_eq!(started.elapsed(), PURCHASE_DELAY);
        assert_eq!(receipt.network, Network::Mainnet);
        assert_eq!(receipt.tx_hash.len(), 66);
        assert!(receipt.tx_hash.starts_with("0x"));
        assert!(receipt.tx_hash[2..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test(start_paused = true)]
    async fn listing_returns_receipt_after_delay() {
        let simulator = ActionSimulator::new();
        let started = Instant::now();

        let receipt = simulator
            .list_for_sale("42", "0xA", "1.2500", "0xowner", Network::Sepolia)
            .await
            .unwrap();

        assert_eq!(started.elapsed(), LISTING_DELAY);
        assert_eq!(receipt.network, Network::Sepolia);
    }

    #[tokio::test]
    async fn purchase_rejects_empty_arguments() {
        let simulator = ActionSimulator::new();
        for (token, contract, buyer) in
            [("", "0xA", "0xb"), ("1", "", "0xb"), ("1", "0xA", "")]
        {
            let result = simulator
                .purchase(token, contract, Network::Mainnet, buyer)
                .await;
            assert!(matches!(
                result.unwrap_err(),
                GalleryError::InvalidArgument { .. }
            ));
        }
    }

    #[tokio::test]
    async fn listing_rejects_empty_arguments() {
        let simulator = ActionSimulator::new();
        let result = simulator
            .list_for_sale("1", "0xA", "", "0xowner", Network::Mainnet)
            .await;
        assert!(matches!(
            result.unwrap_err(),
            GalleryError::InvalidArgument { .. }
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn tx_hashes_are_unique() {
        let simulator = ActionSimulator::new();
        let a = simulator
            .purchase("1", "0xA", Network::Mainnet, "0xb")
            .await
            .unwrap();
        let b = simulator
            .purchase("1", "0xA", Network::Mainnet, "0xb")
            .await
            .unwrap();
        assert_ne!(a.tx_hash, b.tx_hash);
    }
}
