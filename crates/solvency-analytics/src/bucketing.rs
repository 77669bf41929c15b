//! Risk-bucket partitioning of a transaction list.
//!
//! The partition is computed once per analysis and shared (read-only) by the
//! analyzers. Keys are a `BTreeMap` so iteration, and everything derived
//! from it, is reproducible across runs.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use solvency_core::{RiskBucket, TransactionRecord};

/// A transaction list partitioned by risk bucket.
///
/// Input order is preserved within each bucket.
pub type BucketMap<'a> = BTreeMap<RiskBucket, Vec<&'a TransactionRecord>>;

/// Partitions transactions by risk bucket.
///
/// Stable: input order is preserved within each bucket. Empty input yields
/// an empty map.
#[must_use]
pub fn bucket_transactions(transactions: &[TransactionRecord]) -> BucketMap<'_> {
    let mut buckets: BucketMap<'_> = BTreeMap::new();
    for txn in transactions {
        buckets.entry(txn.bucket()).or_default().push(txn);
    }
    buckets
}

/// Aggregate view of one risk bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BucketBreakdown {
    /// The bucket.
    pub bucket: RiskBucket,

    /// Number of transactions in the bucket.
    pub txn_count: usize,

    /// Sum of absolute amounts in the bucket.
    pub total_amount: Decimal,

    /// Share of the absolute amount across all transactions (0-100).
    pub pct_of_total: f64,
}

/// Builds the per-bucket breakdown, sorted descending by total amount.
///
/// Buckets with equal totals keep the enum's declaration order, so the
/// output ordering is reproducible.
#[must_use]
pub fn bucket_breakdown(buckets: &BucketMap<'_>) -> Vec<BucketBreakdown> {
    let mut overall_total = Decimal::ZERO;
    let mut rows: Vec<(RiskBucket, usize, Decimal)> = Vec::with_capacity(buckets.len());

    for (bucket, txns) in buckets {
        let total: Decimal = txns.iter().map(|t| t.amount).sum();
        overall_total += total;
        rows.push((*bucket, txns.len(), total));
    }

    let mut breakdown: Vec<BucketBreakdown> = rows
        .into_iter()
        .map(|(bucket, txn_count, total_amount)| {
            let pct_of_total = if overall_total.is_zero() {
                0.0
            } else {
                (total_amount / overall_total * Decimal::ONE_HUNDRED)
                    .to_f64()
                    .unwrap_or(0.0)
            };
            BucketBreakdown {
                bucket,
                txn_count,
                total_amount,
                pct_of_total,
            }
        })
        .collect();

    breakdown.sort_by(|a, b| b.total_amount.cmp(&a.total_amount));
    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use solvency_core::{Category, Direction};

    fn txn(category: Category, direction: Direction, amount: Decimal) -> TransactionRecord {
        TransactionRecord::builder()
            .document_id("doc-1")
            .date_ymd(2025, 1, 15)
            .amount(amount)
            .description("TEST")
            .direction(direction)
            .category(category)
            .build().unwrap()
    }

    #[test]
    fn test_empty_input_yields_empty_map() {
        let buckets = bucket_transactions(&[]);
        assert!(buckets.is_empty());
        assert!(bucket_breakdown(&buckets).is_empty());
    }

    #[test]
    fn test_partition_preserves_order_within_bucket() {
        let txns = vec![
            txn(Category::Rent, Direction::Debit, dec!(900)),
            txn(Category::SalaryWages, Direction::Credit, dec!(3000)),
            txn(Category::Utilities, Direction::Debit, dec!(120)),
        ];
        let buckets = bucket_transactions(&txns);

        let operating = &buckets[&RiskBucket::OperatingExpense];
        assert_eq!(operating.len(), 2);
        assert_eq!(operating[0].amount, dec!(900));
        assert_eq!(operating[1].amount, dec!(120));
    }

    #[test]
    fn test_unknown_category_lands_in_other() {
        let txns = vec![txn(Category::Error, Direction::Debit, dec!(10))];
        let buckets = bucket_transactions(&txns);
        assert!(buckets.contains_key(&RiskBucket::Other));
    }

    #[test]
    fn test_breakdown_totals_and_percentages() {
        let txns = vec![
            txn(Category::SalaryWages, Direction::Credit, dec!(3000)),
            txn(Category::Rent, Direction::Debit, dec!(900)),
            txn(Category::Utilities, Direction::Debit, dec!(100)),
        ];
        let buckets = bucket_transactions(&txns);
        let breakdown = bucket_breakdown(&buckets);

        // Sorted descending by total: income 3000, operating 1000
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].bucket, RiskBucket::Income);
        assert_eq!(breakdown[0].total_amount, dec!(3000));
        assert_eq!(breakdown[1].bucket, RiskBucket::OperatingExpense);
        assert_eq!(breakdown[1].txn_count, 2);
        assert!((breakdown[0].pct_of_total - 75.0).abs() < 1e-9);
        assert!((breakdown[1].pct_of_total - 25.0).abs() < 1e-9);

        // Partition property: bucket totals sum to the overall absolute total
        let sum: Decimal = breakdown.iter().map(|b| b.total_amount).sum();
        assert_eq!(sum, dec!(4000));
    }
}
