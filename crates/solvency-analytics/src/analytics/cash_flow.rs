//! Cash-flow analytics.
//!
//! Income, expenses, margin, and the operating-vs-discretionary split.
//! Liquidity movements (transfers between own accounts) are not cash flow
//! and are excluded from every total here.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use solvency_core::{Direction, RiskBucket, TransactionRecord};

use crate::bucketing::BucketMap;
use crate::config::AnalyticsConfig;
use crate::parallel::maybe_parallel_fold;

/// Aggregated cash-flow metrics over one statement window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashFlowMetrics {
    /// Total non-transfer credits.
    pub income: Decimal,

    /// Total non-transfer debits.
    pub expenses: Decimal,

    /// `income - expenses`.
    pub net_cash_flow: Decimal,

    /// `net_cash_flow / income` as a percentage (0.0 when income is zero).
    pub cash_flow_margin: f64,

    /// Debits in the operating-expense bucket.
    pub operating_expenses: Decimal,

    /// Debits in the discretionary-expense bucket.
    pub discretionary_expenses: Decimal,

    /// `operating_expenses / expenses` (0.0 when expenses are zero).
    pub operating_expense_ratio: f64,

    /// `discretionary_expenses / expenses` (0.0 when expenses are zero).
    pub discretionary_expense_ratio: f64,
}

/// Calculates cash-flow metrics from the transaction list and the shared
/// bucket partition.
#[must_use]
pub fn calculate_cash_flow_metrics(
    transactions: &[TransactionRecord],
    buckets: &BucketMap<'_>,
    config: &AnalyticsConfig,
) -> CashFlowMetrics {
    let (income, expenses) = maybe_parallel_fold(
        transactions,
        config,
        (Decimal::ZERO, Decimal::ZERO),
        |(inflow, outflow), t| {
            if t.is_transfer() {
                (inflow, outflow)
            } else {
                match t.direction {
                    Direction::Credit => (inflow + t.amount, outflow),
                    Direction::Debit => (inflow, outflow + t.amount),
                }
            }
        },
        |(a, b), (c, d)| (a + c, b + d),
    );

    let net_cash_flow = income - expenses;
    let cash_flow_margin = safe_ratio(net_cash_flow, income) * 100.0;

    let operating_expenses = bucket_debits(buckets, RiskBucket::OperatingExpense);
    let discretionary_expenses = bucket_debits(buckets, RiskBucket::DiscretionaryExpense);

    CashFlowMetrics {
        income,
        expenses,
        net_cash_flow,
        cash_flow_margin,
        operating_expenses,
        discretionary_expenses,
        operating_expense_ratio: safe_ratio(operating_expenses, expenses),
        discretionary_expense_ratio: safe_ratio(discretionary_expenses, expenses),
    }
}

/// Sums liquidity-movement credits and debits: `(inflows, outflows)`.
///
/// Informational only - these totals never feed the cash-flow metrics.
#[must_use]
pub fn liquidity_flows(buckets: &BucketMap<'_>) -> (Decimal, Decimal) {
    let Some(liquidity_txns) = buckets.get(&RiskBucket::LiquidityMovement) else {
        return (Decimal::ZERO, Decimal::ZERO);
    };

    let mut inflows = Decimal::ZERO;
    let mut outflows = Decimal::ZERO;
    for t in liquidity_txns {
        match t.direction {
            Direction::Credit => inflows += t.amount,
            Direction::Debit => outflows += t.amount,
        }
    }
    (inflows, outflows)
}

/// Sums debit amounts in one bucket.
pub(crate) fn bucket_debits(buckets: &BucketMap<'_>, bucket: RiskBucket) -> Decimal {
    buckets
        .get(&bucket)
        .map(|txns| {
            txns.iter()
                .filter(|t| t.direction == Direction::Debit)
                .map(|t| t.amount)
                .sum()
        })
        .unwrap_or(Decimal::ZERO)
}

/// `numer / denom` as f64, 0.0 when the denominator is zero.
pub(crate) fn safe_ratio(numer: Decimal, denom: Decimal) -> f64 {
    if denom.is_zero() {
        return 0.0;
    }
    (numer / denom).to_f64().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bucketing::bucket_transactions;
    use rust_decimal_macros::dec;
    use solvency_core::Category;

    fn txn(category: Category, direction: Direction, amount: Decimal) -> TransactionRecord {
        TransactionRecord::builder()
            .document_id("doc-1")
            .date_ymd(2025, 2, 10)
            .amount(amount)
            .description("TEST")
            .direction(direction)
            .category(category)
            .build().unwrap()
    }

    #[test]
    fn test_transfers_excluded_from_cash_flow() {
        let txns = vec![
            txn(Category::SalaryWages, Direction::Credit, dec!(5000)),
            txn(Category::TransferIn, Direction::Credit, dec!(2000)),
            txn(Category::Rent, Direction::Debit, dec!(1500)),
            txn(Category::TransferOut, Direction::Debit, dec!(800)),
        ];
        let buckets = bucket_transactions(&txns);
        let metrics = calculate_cash_flow_metrics(&txns, &buckets, &AnalyticsConfig::default());

        assert_eq!(metrics.income, dec!(5000));
        assert_eq!(metrics.expenses, dec!(1500));
        assert_eq!(metrics.net_cash_flow, dec!(3500));
        assert!((metrics.cash_flow_margin - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_expense_ratios() {
        let txns = vec![
            txn(Category::SalaryWages, Direction::Credit, dec!(4000)),
            txn(Category::Rent, Direction::Debit, dec!(600)),
            txn(Category::Dining, Direction::Debit, dec!(400)),
        ];
        let buckets = bucket_transactions(&txns);
        let metrics = calculate_cash_flow_metrics(&txns, &buckets, &AnalyticsConfig::default());

        assert_eq!(metrics.operating_expenses, dec!(600));
        assert_eq!(metrics.discretionary_expenses, dec!(400));
        assert!((metrics.operating_expense_ratio - 0.6).abs() < 1e-9);
        assert!((metrics.discretionary_expense_ratio - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_zero_denominators_resolve_to_zero() {
        let txns = vec![txn(Category::TransferIn, Direction::Credit, dec!(100))];
        let buckets = bucket_transactions(&txns);
        let metrics = calculate_cash_flow_metrics(&txns, &buckets, &AnalyticsConfig::default());

        assert_eq!(metrics.income, Decimal::ZERO);
        assert_eq!(metrics.cash_flow_margin, 0.0);
        assert_eq!(metrics.operating_expense_ratio, 0.0);
        assert_eq!(metrics.discretionary_expense_ratio, 0.0);
    }

    #[test]
    fn test_liquidity_flows() {
        let txns = vec![
            txn(Category::TransferIn, Direction::Credit, dec!(2000)),
            txn(Category::CashDeposit, Direction::Credit, dec!(500)),
            txn(Category::Withdrawal, Direction::Debit, dec!(300)),
            txn(Category::SalaryWages, Direction::Credit, dec!(9999)),
        ];
        let buckets = bucket_transactions(&txns);
        let (inflows, outflows) = liquidity_flows(&buckets);

        assert_eq!(inflows, dec!(2500));
        assert_eq!(outflows, dec!(300));
    }

    #[test]
    fn test_liquidity_flows_without_movements() {
        let txns = vec![txn(Category::SalaryWages, Direction::Credit, dec!(100))];
        let buckets = bucket_transactions(&txns);
        assert_eq!(liquidity_flows(&buckets), (Decimal::ZERO, Decimal::ZERO));
    }
}
