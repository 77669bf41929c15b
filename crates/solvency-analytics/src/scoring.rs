//! Composite risk scoring.
//!
//! Collapses the core cash-flow and debt metrics into a single 0-100 score
//! and a letter rating for quick triage. The score is a heuristic on top of
//! the detailed metrics, not a replacement for them.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use solvency_core::{Direction, RiskBucket, TransactionRecord};

use crate::analytics::calculate_cash_flow_metrics;
use crate::bucketing::bucket_transactions;
use crate::config::AnalyticsConfig;

/// Letter rating derived from the risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskRating {
    /// Score 80-100.
    A,
    /// Score 65-79.
    B,
    /// Score 45-64.
    C,
    /// Score 0-44.
    D,
}

impl fmt::Display for RiskRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        };
        f.write_str(s)
    }
}

/// Composite risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskScore {
    /// 0 (worst) to 100 (best).
    pub score: u8,

    /// Letter rating band for `score`.
    pub rating: RiskRating,
}

/// Scores underwriting risk from the transaction window.
///
/// Starts at 50 and adds four components: cash-flow margin (up to +40,
/// -20 when negative), debt coverage (up to +30, -30 when debt cannot be
/// serviced), activity level (up to +20), and income size (up to +10).
/// Empty input scores (0, D).
#[must_use]
pub fn score_risk(transactions: &[TransactionRecord]) -> RiskScore {
    if transactions.is_empty() {
        return RiskScore {
            score: 0,
            rating: RiskRating::D,
        };
    }

    let buckets = bucket_transactions(transactions);
    let cash_flow =
        calculate_cash_flow_metrics(transactions, &buckets, &AnalyticsConfig::sequential());
    let income = cash_flow.income;
    let net_cash_flow = cash_flow.net_cash_flow;
    let debt_payments: Decimal = buckets
        .get(&RiskBucket::Financing)
        .map(|txns| {
            txns.iter()
                .filter(|t| t.direction == Direction::Debit)
                .map(|t| t.amount)
                .sum()
        })
        .unwrap_or(Decimal::ZERO);

    let mut score: i32 = 50;
    score += score_cash_flow(net_cash_flow, income);
    score += score_debt_coverage(debt_payments, net_cash_flow);
    score += score_activity_level(transactions.len());
    score += score_income_size(income);

    let score = score.clamp(0, 100) as u8;
    RiskScore {
        score,
        rating: rating_for(score),
    }
}

/// Cash-flow component: margin bands worth up to 40 points.
fn score_cash_flow(net_cash_flow: Decimal, income: Decimal) -> i32 {
    if net_cash_flow <= Decimal::ZERO {
        return -20;
    }
    let margin = if income > Decimal::ZERO {
        (net_cash_flow / income).to_f64().unwrap_or(0.0)
    } else {
        0.0
    };
    if margin >= 0.15 {
        40
    } else if margin >= 0.10 {
        30
    } else if margin >= 0.05 {
        20
    } else {
        10
    }
}

/// Debt-coverage component: DSCR bands worth up to 30 points.
fn score_debt_coverage(debt_payments: Decimal, net_cash_flow: Decimal) -> i32 {
    if debt_payments.is_zero() {
        return 20;
    }
    if net_cash_flow <= Decimal::ZERO {
        return -30;
    }
    let dscr = (net_cash_flow / debt_payments).to_f64().unwrap_or(0.0);
    if dscr >= 1.5 {
        30
    } else if dscr >= 1.25 {
        25
    } else if dscr >= 1.1 {
        15
    } else {
        -10
    }
}

/// Activity component: transaction volume worth up to 20 points.
fn score_activity_level(transaction_count: usize) -> i32 {
    if transaction_count >= 100 {
        20
    } else if transaction_count >= 50 {
        15
    } else if transaction_count >= 20 {
        10
    } else {
        5
    }
}

/// Income-size component: absolute deposit volume worth up to 10 points.
fn score_income_size(income: Decimal) -> i32 {
    let income = income.to_f64().unwrap_or(0.0);
    if income >= 100_000.0 {
        10
    } else if income >= 50_000.0 {
        8
    } else if income >= 25_000.0 {
        5
    } else if income >= 10_000.0 {
        3
    } else {
        0
    }
}

fn rating_for(score: u8) -> RiskRating {
    if score >= 80 {
        RiskRating::A
    } else if score >= 65 {
        RiskRating::B
    } else if score >= 45 {
        RiskRating::C
    } else {
        RiskRating::D
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use solvency_core::Category;

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
    fn test_empty_input_scores_zero_d() {
        let score = score_risk(&[]);
        assert_eq!(score.score, 0);
        assert_eq!(score.rating, RiskRating::D);
    }

    #[test]
    fn test_healthy_account_rates_a() {
        // Strong margin, no debt, large income
        let txns = vec![
            txn(Category::BusinessRevenue, Direction::Credit, dec!(120000)),
            txn(Category::Rent, Direction::Debit, dec!(20000)),
        ];
        let score = score_risk(&txns);

        // 50 + 40 (margin >= 15%) + 20 (no debt) + 5 (low activity) + 10 (income)
        assert_eq!(score.score, 100);
        assert_eq!(score.rating, RiskRating::A);
    }

    #[test]
    fn test_negative_cash_flow_penalized() {
        let txns = vec![
            txn(Category::BusinessRevenue, Direction::Credit, dec!(1000)),
            txn(Category::Rent, Direction::Debit, dec!(3000)),
            txn(Category::LoanPayment, Direction::Debit, dec!(500)),
        ];
        let score = score_risk(&txns);

        // 50 - 20 (negative cash flow) - 30 (cannot service debt) + 5 + 0 = 5
        assert_eq!(score.score, 5);
        assert_eq!(score.rating, RiskRating::D);
    }

    #[test]
    fn test_transfers_do_not_inflate_income() {
        let txns = vec![
            txn(Category::TransferIn, Direction::Credit, dec!(500000)),
            txn(Category::BusinessRevenue, Direction::Credit, dec!(1000)),
            txn(Category::Rent, Direction::Debit, dec!(900)),
        ];
        let score = score_risk(&txns);

        // Margin on the 1000 of real income is 10%: 50 + 30 + 20 + 5 + 0 = 105 -> 100
        assert_eq!(score.score, 100);
    }

    #[test]
    fn test_rating_bands() {
        assert_eq!(rating_for(80), RiskRating::A);
        assert_eq!(rating_for(79), RiskRating::B);
        assert_eq!(rating_for(65), RiskRating::B);
        assert_eq!(rating_for(64), RiskRating::C);
        assert_eq!(rating_for(45), RiskRating::C);
        assert_eq!(rating_for(44), RiskRating::D);
    }
}
