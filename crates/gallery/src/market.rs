// SPDX-FileCopyrightText: 2025 NFT Gallery Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Synthetic market data
//!
//! Prices and listed flags in this system are placeholders for a real
//! pricing/marketplace-state collaborator. The capability is isolated behind
//! the [`MarketData`] trait so tests can seed it for determinism and a real
//! implementation can replace it without touching the aggregation engine.

use std::sync::{Mutex, PoisonError};

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Price band an item is quoted in
///
/// Marketplace listings should appear to command a higher price than
/// freshly-seen owned items, so the two flows quote from distinct bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceBand {
    /// Items surfaced by an owner query
    Owned,
    /// Items surfaced by browse and search listings
    Listed,
}

/// Source of synthetic price quotes and listed flags
pub trait MarketData: Send + Sync {
    /// An ETH-denominated price quote with four decimal places
    fn quote(&self, band: PriceBand) -> String;

    /// Whether an item in this band appears listed for sale
    fn listed(&self, band: PriceBand) -> bool;
}

/// Random market data over a seedable generator
#[derive(Debug)]
pub struct SyntheticMarket {
    rng: Mutex<StdRng>,
}

impl SyntheticMarket {
    /// Market seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Market with a fixed seed, for deterministic tests
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut rng)
    }
}

impl Default for SyntheticMarket {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl MarketData for SyntheticMarket {
    fn quote(&self, band: PriceBand) -> String {
        let value = self.with_rng(|rng| match band {
            PriceBand::Owned => rng.gen_range(0.05_f64..1.50),
            PriceBand::Listed => rng.gen_range(0.50_f64..5.00),
        });
        format!("{value:.4}")
    }

    fn listed(&self, band: PriceBand) -> bool {
        let probability = match band {
            PriceBand::Owned => 0.35,
            PriceBand::Listed => 0.70,
        };
        self.with_rng(|rng| rng.gen_bool(probability))
    }
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::*;

    #[test]
    fn quotes_match_price_pattern() {
        let market = SyntheticMarket::from_entropy();
        let pattern = Regex::new(r"^\d+\.\d{4}$").unwrap();
        for _ in 0..50 {
            assert!(pattern.is_match(&market.quote(PriceBand::Owned)));
            assert!(pattern.is_match(&market.quote(PriceBand::Listed)));
        }
    }

    #[test]
    fn quotes_stay_in_band() {
        let market = SyntheticMarket::from_entropy();
        for _ in 0..50 {
            let owned: f64 = market.quote(PriceBand::Owned).parse().unwrap();
            assert!((0.05..1.51).contains(&owned));
            let listed: f64 = market.quote(PriceBand::Listed).parse().unwrap();
            assert!((0.50..5.01).contains(&listed));
        }
    }

    #[test]
    fn seeded_markets_are_deterministic() {
        let a = SyntheticMarket::seeded(7);
        let b = SyntheticMarket::seeded(7);
        for _ in 0..10 {
            assert_eq!(a.quote(PriceBand::Listed), b.quote(PriceBand::Listed));
            assert_eq!(a.listed(PriceBand::Owned), b.listed(PriceBand::Owned));
        }
    }
}
