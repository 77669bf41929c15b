//! Debt-service analytics.
//!
//! Existing debt service, debt-service coverage ratios, the amortized
//! pro-forma payment for a proposed loan, and loan-payment pattern
//! detection from financing-bucket activity.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use solvency_core::{Cadence, Direction, RiskBucket, TransactionRecord};

use super::cash_flow::{bucket_debits, safe_ratio};
use crate::bucketing::{bucket_transactions, BucketMap};
use crate::stats::median;

/// Parameters of a proposed loan scenario.
///
/// The pro-forma calculation needs all three together; passing
/// `Option<&LoanTerms>` to [`calculate_debt_metrics`] encodes the
/// all-or-nothing rule in the type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Principal amount.
    pub principal: Decimal,

    /// Annual interest rate as a decimal (0.12 for 12%).
    pub annual_rate: f64,

    /// Term in months.
    pub term_months: u32,
}

/// Aggregated debt-service metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtMetrics {
    /// Existing debt service: financing-bucket debits.
    pub existing_debt_service: Decimal,

    /// Amortized payment for the proposed loan (zero without loan terms).
    pub pro_forma_payment: Decimal,

    /// Net cash flow / existing debt service; `None` when there is no
    /// existing debt service.
    pub dscr_existing: Option<f64>,

    /// Net cash flow / (existing + proposed payment); `None` when that sum
    /// is zero.
    pub dscr_pro_forma: Option<f64>,
}

/// A detected loan-payment pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanSignal {
    /// Normalized lender name (`"unknown"` when the merchant is absent).
    pub lender: String,

    /// Mean absolute payment amount.
    pub avg_payment: Decimal,

    /// Inferred payment cadence.
    pub cadence: Cadence,

    /// Number of payments observed.
    pub count: usize,
}

/// Calculates debt-service metrics.
///
/// `net_cash_flow` comes from the cash-flow analyzer; `loan_terms` is the
/// optional proposed-loan scenario.
#[must_use]
pub fn calculate_debt_metrics(
    buckets: &BucketMap<'_>,
    net_cash_flow: Decimal,
    loan_terms: Option<&LoanTerms>,
) -> DebtMetrics {
    let eds = bucket_debits(buckets, RiskBucket::Financing);
    let new_payment = loan_terms.map(amortized_payment).unwrap_or(Decimal::ZERO);

    let dscr_existing = if eds.is_zero() {
        None
    } else {
        Some(safe_ratio(net_cash_flow, eds))
    };

    let total_debt_service = eds + new_payment;
    let dscr_pro_forma = if total_debt_service.is_zero() {
        None
    } else {
        Some(safe_ratio(net_cash_flow, total_debt_service))
    };

    DebtMetrics {
        existing_debt_service: eds,
        pro_forma_payment: new_payment,
        dscr_existing,
        dscr_pro_forma,
    }
}

/// Calculates the standard amortized monthly payment
/// `P = r * A / (1 - (1 + r)^(-n))`, rounded half-up to cents.
///
/// A zero rate degenerates to the linear `A / n`. Non-positive principal or
/// term, or a non-finite/negative rate, yields zero rather than an error.
#[must_use]
pub fn amortized_payment(terms: &LoanTerms) -> Decimal {
    if terms.principal <= Decimal::ZERO
        || terms.term_months == 0
        || !terms.annual_rate.is_finite()
        || terms.annual_rate < 0.0
    {
        return Decimal::ZERO;
    }

    let Some(annual_rate) = Decimal::from_f64(terms.annual_rate) else {
        return Decimal::ZERO;
    };
    let monthly_rate = annual_rate / dec!(12);

    if monthly_rate.is_zero() {
        return (terms.principal / Decimal::from(terms.term_months)).round_dp_with_strategy(
            2,
            RoundingStrategy::MidpointAwayFromZero,
        );
    }

    let discount = (Decimal::ONE + monthly_rate).powi(-i64::from(terms.term_months));
    let denominator = Decimal::ONE - discount;
    if denominator.is_zero() {
        return Decimal::ZERO;
    }

    ((monthly_rate * terms.principal) / denominator)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Detects loan-payment patterns from financing-bucket debits.
///
/// Lenders with at least two payments get a cadence from the median
/// day-interval between consecutive payments. Output is sorted descending by
/// average payment (lender name as tie-break via the stable sort).
#[must_use]
pub fn detect_loan_signals(transactions: &[TransactionRecord]) -> Vec<LoanSignal> {
    let buckets = bucket_transactions(transactions);
    let financing_debits: Vec<&TransactionRecord> = buckets
        .get(&RiskBucket::Financing)
        .map(|txns| {
            txns.iter()
                .copied()
                .filter(|t| t.direction == Direction::Debit)
                .collect()
        })
        .unwrap_or_default();

    let mut groups: BTreeMap<String, Vec<&TransactionRecord>> = BTreeMap::new();
    for t in financing_debits {
        groups.entry(t.merchant_key()).or_default().push(t);
    }

    let mut signals: Vec<LoanSignal> = Vec::new();
    for (lender, mut group) in groups {
        if group.len() < 2 {
            continue;
        }

        group.sort_by_key(|t| t.date);
        let deltas: Vec<i64> = group
            .windows(2)
            .map(|w| (w[1].date - w[0].date).num_days())
            .collect();
        let cadence = Cadence::from_median_days(median(&deltas));

        let total: Decimal = group.iter().map(|t| t.amount).sum();
        let avg_payment = total / Decimal::from(group.len() as u64);

        signals.push(LoanSignal {
            lender: if lender.is_empty() {
                "unknown".to_string()
            } else {
                lender
            },
            avg_payment,
            cadence,
            count: group.len(),
        });
    }

    signals.sort_by(|a, b| b.avg_payment.cmp(&a.avg_payment));
    signals
}
