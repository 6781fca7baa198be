// SPDX-FileCopyrightText: 2025 NFT Gallery Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Fan-out settlement
//!
//! The one combinator behind every concurrent fan-out in the engine: run all
//! branches, keep the successes in input order, and log each failure as the
//! diagnostic side-channel. A failed branch removes only its own contribution.

use std::fmt::Display;

use futures::future::join_all;
use tracing::warn;

/// Run all labeled branches concurrently, keeping successes in input order
///
/// Failures are absorbed: each is logged at `warn` with its branch label and
/// excluded from the result. Completion order never affects output order.
pub async fn settle_all<T, E, F, I>(branches: I) -> Vec<T>
where
    I: IntoIterator<Item = (String, F)>,
    F: Future<Output = Result<T, E>>,
    E: Display,
{
    let (labels, futures): (Vec<_>, Vec<_>) = branches.into_iter().unzip();
    let results = join_all(futures).await;

    labels
        .into_iter()
        .zip(results)
        .filter_map(|(label, result)| match result {
            Ok(value) => Some(value),
            Err(error) => {
                warn!(branch = %label, %error, "fan-out branch failed; dropping its contribution");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn branch(value: u32, fail: bool) -> Result<u32, String> {
        if fail {
            Err(format!("branch {value} failed"))
        } else {
            Ok(value)
        }
    }

    #[tokio::test]
    async fn successes_keep_input_order() {
        let branches = vec![
            ("a".to_string(), branch(1, false)),
            ("b".to_string(), branch(2, false)),
            ("c".to_string(), branch(3, false)),
        ];
        assert_eq!(settle_all(branches).await, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn one_failure_removes_only_its_contribution() {
        let branches = vec![
            ("a".to_string(), branch(1, false)),
            ("b".to_string(), branch(2, true)),
            ("c".to_string(), branch(3, false)),
        ];
        assert_eq!(settle_all(branches).await, vec![1, 3]);
    }

    #[tokio::test]
    async fn all_failures_yield_empty() {
        let branches = vec![
            ("a".to_string(), branch(1, true)),
            ("b".to_string(), branch(2, true)),
        ];
        assert_eq!(settle_all(branches).await, Vec::<u32>::new());
    }
}
