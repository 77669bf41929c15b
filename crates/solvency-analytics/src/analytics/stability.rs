//! Income-stability analytics.
//!
//! Monthly rollup, deposit variability and trend, payer concentration, and
//! payment-processor mix.

use chrono::Datelike;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use solvency_core::{Direction, RiskBucket, TransactionRecord};

use crate::stats::{mean, ols_slope, population_std_dev};

/// Known payment processors, matched in order against descriptions.
///
/// The order is part of the contract: the first matching keyword wins.
const PROCESSOR_KEYWORDS: [(&str, &str); 8] = [
    ("stripe", "Stripe"),
    ("square", "Square"),
    ("shopify", "Shopify"),
    ("paypal", "PayPal"),
    ("braintree", "Braintree"),
    ("adyen", "Adyen"),
    ("amazon pay", "Amazon Pay"),
    ("skrill", "Skrill"),
];

/// One calendar month of non-transfer activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyRollup {
    /// Month label, `"YYYY-MM"`.
    pub ym: String,

    /// Non-transfer credits.
    pub deposits: Decimal,

    /// Non-transfer debits.
    pub withdrawals: Decimal,

    /// `deposits - withdrawals`.
    pub net: Decimal,

    /// All transactions dated in the month, transfers included.
    pub txn_count: usize,
}

/// Deposit variability, trend, and payer-concentration statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StabilityStats {
    /// Population coefficient of variation of monthly deposits.
    pub deposit_cv: f64,

    /// OLS slope of monthly deposits against month index.
    pub deposit_slope_per_month: f64,

    /// Largest payer's share of total deposits (0-1).
    pub top_payer_share: f64,

    /// Number of distinct (normalized) payers.
    pub unique_payers: usize,
}

/// Payment-processor distribution of deposit activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessorMix {
    /// Credits matched to a known card/payment processor.
    pub card_settlements: Decimal,

    /// Unmatched credits outside the income/other buckets.
    pub ach_wires: Decimal,

    /// Unmatched credits in the income/other buckets.
    pub other: Decimal,

    /// Top five processors by settled amount, descending.
    pub top_processors: Vec<(String, Decimal)>,
}

/// Rolls transactions up by calendar month, ascending by label.
#[must_use]
pub fn calculate_monthly_rollup(transactions: &[TransactionRecord]) -> Vec<MonthlyRollup> {
    let mut groups: BTreeMap<String, Vec<&TransactionRecord>> = BTreeMap::new();
    for t in transactions {
        groups.entry(month_label(t)).or_default().push(t);
    }

    groups
        .into_iter()
        .map(|(ym, txns)| {
            let mut deposits = Decimal::ZERO;
            let mut withdrawals = Decimal::ZERO;
            for t in &txns {
                if t.is_transfer() {
                    continue;
                }
                match t.direction {
                    Direction::Credit => deposits += t.amount,
                    Direction::Debit => withdrawals += t.amount,
                }
            }
            MonthlyRollup {
                ym,
                deposits,
                withdrawals,
                net: deposits - withdrawals,
                txn_count: txns.len(),
            }
        })
        .collect()
}

/// Calculates stability statistics from the transaction list and its monthly
/// rollup.
#[must_use]
pub fn calculate_stability_stats(
    transactions: &[TransactionRecord],
    monthly_rollup: &[MonthlyRollup],
) -> StabilityStats {
    if monthly_rollup.is_empty() {
        return StabilityStats {
            deposit_cv: 0.0,
            deposit_slope_per_month: 0.0,
            top_payer_share: 0.0,
            unique_payers: 0,
        };
    }

    let deposit_values: Vec<f64> = monthly_rollup
        .iter()
        .map(|m| m.deposits.to_f64().unwrap_or(0.0))
        .collect();

    let mean_deposits = mean(&deposit_values);
    let deposit_cv = if mean_deposits == 0.0 {
        0.0
    } else {
        population_std_dev(&deposit_values) / mean_deposits
    };

    let (top_payer_share, unique_payers) = payer_concentration(transactions);

    StabilityStats {
        deposit_cv,
        deposit_slope_per_month: ols_slope(&deposit_values),
        top_payer_share,
        unique_payers,
    }
}

/// Analyzes the payment-processor distribution of non-transfer credits.
///
/// Descriptions are matched case-insensitively against the processor
/// keyword table; the first match wins and settles to that processor.
/// Unmatched credits fall to `other` when their bucket is income/other
/// (direct revenue), otherwise to `ach_wires`.
#[must_use]
pub fn analyze_processor_mix(transactions: &[TransactionRecord]) -> ProcessorMix {
    let mut card_settlements = Decimal::ZERO;
    let mut ach_wires = Decimal::ZERO;
    let mut other = Decimal::ZERO;
    let mut processor_totals: BTreeMap<&'static str, Decimal> = BTreeMap::new();

    for t in transactions {
        if t.direction != Direction::Credit || t.is_transfer() {
            continue;
        }

        let description = t.description.to_lowercase();
        let matched = PROCESSOR_KEYWORDS
            .iter()
            .find(|(keyword, _)| description.contains(keyword));

        if let Some((_, label)) = matched {
            *processor_totals.entry(label).or_default() += t.amount;
            card_settlements += t.amount;
            continue;
        }

        match t.bucket() {
            RiskBucket::Income | RiskBucket::Other => other += t.amount,
            _ => ach_wires += t.amount,
        }
    }

    let mut top_processors: Vec<(String, Decimal)> = processor_totals
        .into_iter()
        .map(|(label, total)| (label.to_string(), total))
        .collect();
    top_processors.sort_by(|a, b| b.1.cmp(&a.1));
    top_processors.truncate(5);

    ProcessorMix {
        card_settlements,
        ach_wires,
        other,
        top_processors,
    }
}

/// Top-payer share and distinct payer count over non-transfer credits.
fn payer_concentration(transactions: &[TransactionRecord]) -> (f64, usize) {
    let mut payer_totals: BTreeMap<String, Decimal> = BTreeMap::new();

    for t in transactions {
        if t.direction != Direction::Credit || t.is_transfer() {
            continue;
        }
        let key = t.merchant_key();
        let payer = if key.is_empty() {
            "unknown".to_string()
        } else {
            key
        };
        *payer_totals.entry(payer).or_default() += t.amount;
    }

    if payer_totals.is_empty() {
        return (0.0, 0);
    }

    let total_deposits: Decimal = payer_totals.values().copied().sum();
    let top_payer = payer_totals
        .values()
        .copied()
        .max()
        .unwrap_or(Decimal::ZERO);
    let share = if total_deposits > Decimal::ZERO {
        (top_payer / total_deposits).to_f64().unwrap_or(0.0)
    } else {
        0.0
    };

    (share, payer_totals.len())
}

/// `"YYYY-MM"` grouping label for a transaction's date.
pub(crate) fn month_label(t: &TransactionRecord) -> String {
    format!("{:04}-{:02}", t.date.year(), t.date.month())
}
