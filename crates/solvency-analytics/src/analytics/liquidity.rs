//! Liquidity analytics.
//!
//! Daily-balance statistics (when the statement carries running balances)
//! and NSF/overdraft detection from description text.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use solvency_core::{Direction, TransactionRecord};

const NSF_KEYWORDS: [&str; 4] = ["nsf", "non-sufficient", "returned item charge", "overdraft"];

/// Aggregated liquidity statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiquidityStats {
    /// Mean of daily ending balances; `None` without balance data.
    pub avg_daily_balance: Option<Decimal>,

    /// Minimum balance observed on any day; `None` without balance data.
    pub min_daily_balance: Option<Decimal>,

    /// Number of days whose ending balance was negative.
    pub days_negative: u32,

    /// Number of NSF/overdraft events detected from descriptions.
    pub nsf_count: u32,

    /// Total fees charged on NSF/overdraft debits.
    pub nsf_fees: Decimal,
}

/// Calculates liquidity statistics.
///
/// Balance statistics need at least one record with a running balance;
/// without any, the balance fields are `None` and `days_negative` is zero.
/// Within a day, records are ordered by posting timestamp (falling back to
/// midnight of the transaction date) and the last record's balance is the
/// day's ending balance; days whose last record carries no balance are
/// skipped.
#[must_use]
pub fn calculate_liquidity_stats(transactions: &[TransactionRecord]) -> LiquidityStats {
    let has_balance_data = transactions.iter().any(|t| t.balance_after.is_some());

    let mut daily_endings: Vec<Decimal> = Vec::new();
    let mut daily_minimums: Vec<Decimal> = Vec::new();
    let mut days_negative = 0u32;

    if has_balance_data {
        let mut by_day: BTreeMap<NaiveDate, Vec<&TransactionRecord>> = BTreeMap::new();
        for t in transactions {
            by_day.entry(t.date).or_default().push(t);
        }

        for day_txns in by_day.values_mut() {
            day_txns.sort_by_key(|t| t.posted_or_midnight());

            let Some(ending_balance) = day_txns.last().and_then(|t| t.balance_after) else {
                continue;
            };

            let day_minimum = day_txns
                .iter()
                .filter_map(|t| t.balance_after)
                .min()
                .unwrap_or(ending_balance);

            daily_endings.push(ending_balance);
            daily_minimums.push(day_minimum);
            if ending_balance < Decimal::ZERO {
                days_negative += 1;
            }
        }
    }

    let avg_daily_balance = if daily_endings.is_empty() {
        None
    } else {
        Some(daily_endings.iter().sum::<Decimal>() / Decimal::from(daily_endings.len() as u64))
    };
    let min_daily_balance = daily_minimums.iter().min().copied();

    let (nsf_count, nsf_fees) = analyze_nsf_fees(transactions);

    LiquidityStats {
        avg_daily_balance,
        min_daily_balance,
        days_negative,
        nsf_count,
        nsf_fees,
    }
}

/// Scans descriptions for NSF/overdraft events: `(count, fees)`.
///
/// Every match counts; only debit matches contribute to the fee total.
fn analyze_nsf_fees(transactions: &[TransactionRecord]) -> (u32, Decimal) {
    let mut nsf_count = 0u32;
    let mut nsf_fees = Decimal::ZERO;

    for t in transactions {
        let description = t.description.to_lowercase();
        if NSF_KEYWORDS.iter().any(|k| description.contains(k)) {
            nsf_count += 1;
            if t.direction == Direction::Debit {
                nsf_fees += t.amount;
            }
        }
    }

    (nsf_count, nsf_fees)
}
