//! Recurring-bill detection.
//!
//! Finds debit streams with a stable merchant/category pairing, a regular
//! cadence, and consistent amounts, and scores how confident the pattern is.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use solvency_core::{Cadence, Category, Direction, TransactionRecord};

use crate::stats::{mean, median, population_std_dev};

/// Minimum observations needed to establish a pattern.
const MIN_OCCURRENCES: usize = 3;

/// Bills below this average amount are noise for underwriting purposes.
const MIN_AVG_AMOUNT: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Minimum confidence for a bill to be reported.
const MIN_CONFIDENCE: f64 = 0.5;

/// A detected recurring bill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringBill {
    /// Normalized merchant name (`"unknown"` when absent).
    pub merchant: String,

    /// Category the bill recurs under.
    pub category: Category,

    /// Mean absolute amount.
    pub avg_amount: Decimal,

    /// Inferred cadence.
    pub cadence: Cadence,

    /// Number of occurrences observed.
    pub count: usize,

    /// Pattern confidence, 0-1.
    pub confidence: f64,
}

/// Detects recurring bills among debit transactions.
///
/// Debits are grouped by (normalized merchant, category); groups of at least
/// three get a cadence from the median day-interval and a confidence from
/// amount consistency. Only regular, confident, non-trivial bills are
/// reported, monthly cadence first, then descending amount.
#[must_use]
pub fn detect_recurring_bills(transactions: &[TransactionRecord]) -> Vec<RecurringBill> {
    let mut groups: BTreeMap<(String, Category), Vec<&TransactionRecord>> = BTreeMap::new();
    for t in transactions {
        if t.direction != Direction::Debit {
            continue;
        }
        groups
            .entry((t.merchant_key(), t.category))
            .or_default()
            .push(t);
    }

    let mut bills: Vec<RecurringBill> = Vec::new();
    for ((merchant, category), mut group) in groups {
        if group.len() < MIN_OCCURRENCES {
            continue;
        }

        group.sort_by_key(|t| t.date);
        let deltas: Vec<i64> = group
            .windows(2)
            .map(|w| (w[1].date - w[0].date).num_days())
            .collect();
        if deltas.is_empty() {
            continue;
        }
        let cadence = Cadence::from_median_days(median(&deltas));

        let amounts: Vec<f64> = group
            .iter()
            .map(|t| t.amount.to_f64().unwrap_or(0.0))
            .collect();
        let total: Decimal = group.iter().map(|t| t.amount).sum();
        let avg_amount = total / Decimal::from(group.len() as u64);

        let confidence = pattern_confidence(&amounts, cadence);

        if cadence != Cadence::Irregular && confidence >= MIN_CONFIDENCE && avg_amount >= MIN_AVG_AMOUNT
        {
            bills.push(RecurringBill {
                merchant: if merchant.is_empty() {
                    "unknown".to_string()
                } else {
                    merchant
                },
                category,
                avg_amount,
                cadence,
                count: group.len(),
                confidence,
            });
        }
    }

    bills.sort_by(|a, b| {
        (a.cadence != Cadence::Monthly)
            .cmp(&(b.cadence != Cadence::Monthly))
            .then_with(|| b.avg_amount.cmp(&a.avg_amount))
    });
    bills
}

/// Confidence from amount consistency and cadence regularity.
///
/// The amount coefficient of variation discounts a cadence-dependent base
/// (0.9 regular, 0.5 irregular); a zero mean counts as maximally dispersed.
fn pattern_confidence(amounts: &[f64], cadence: Cadence) -> f64 {
    let avg = mean(amounts);
    let cv = if avg == 0.0 {
        1.0
    } else {
        population_std_dev(amounts) / avg
    };

    let base = if cadence == Cadence::Irregular { 0.5 } else { 0.9 };
    ((1.0 - cv) * base).clamp(0.0, 1.0)
}
