//! Parallel processing utilities for the analyzers.
//!
//! Provides conditional parallel iteration based on configuration and
//! collection size. Uses rayon when the `parallel` feature is enabled. The
//! analyzers are pure folds over a read-only list, so parallel and
//! sequential execution produce identical results.

use crate::config::AnalyticsConfig;

/// Folds over items with a reduce step, conditionally using parallel
/// iteration.
///
/// Uses parallel iteration when:
/// - The `parallel` feature is enabled
/// - `config.parallel` is true
/// - The collection size exceeds `config.parallel_threshold`
///
/// # Example
///
/// ```ignore
/// let total = maybe_parallel_fold(
///     transactions,
///     &config,
///     Decimal::ZERO,
///     |acc, t| acc + t.amount,
///     |a, b| a + b,
/// );
/// ```
#[allow(unused_variables)]
pub fn maybe_parallel_fold<T, U, F, R>(
    items: &[T],
    config: &AnalyticsConfig,
    identity: U,
    fold: F,
    reduce: R,
) -> U
where
    T: Sync,
    U: Send + Sync + Clone,
    F: Fn(U, &T) -> U + Sync + Send,
    R: Fn(U, U) -> U + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if config.should_parallelize(items.len()) {
            return items
                .par_iter()
                .fold(|| identity.clone(), &fold)
                .reduce(|| identity.clone(), reduce);
        }
    }

    items.iter().fold(identity, fold)
}
