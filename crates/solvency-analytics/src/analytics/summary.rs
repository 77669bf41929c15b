//! The orchestrated underwriting-metrics aggregate.
//!
//! Runs every analyzer over one transaction list and assembles the combined
//! result. This is the primary entry point of the engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use solvency_core::TransactionRecord;

use super::{
    analyze_processor_mix, calculate_cash_flow_metrics, calculate_debt_metrics,
    calculate_liquidity_stats, calculate_monthly_rollup, calculate_stability_stats,
    detect_loan_signals, detect_recurring_bills, detect_red_flags, stability::month_label,
    CashFlowMetrics, DebtMetrics, LiquidityStats, LoanSignal, LoanTerms, MonthlyRollup,
    ProcessorMix, RecurringBill, RedFlags, StabilityStats,
};
use crate::bucketing::{bucket_breakdown, bucket_transactions, BucketBreakdown};
use crate::config::AnalyticsConfig;
use crate::error::{AnalyticsError, AnalyticsResult};

/// Comprehensive underwriting metrics for one transaction window.
///
/// Produced fresh per call by [`UnderwritingMetrics::calculate`]; nothing in
/// here is mutated or cached afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnderwritingMetrics {
    /// Cash-flow totals, margin, and expense split.
    pub cash_flow: CashFlowMetrics,

    /// Debt service and coverage ratios.
    pub debt: DebtMetrics,

    /// Liquidity-movement credits (informational, not cash flow).
    pub liquidity_in: Decimal,

    /// Liquidity-movement debits (informational, not cash flow).
    pub liquidity_out: Decimal,

    /// Number of transactions analyzed.
    pub transaction_count: usize,

    /// Mean absolute transaction size.
    pub average_transaction_size: Decimal,

    /// Deposit variability, trend, and payer concentration.
    pub stability: StabilityStats,

    /// Payment-processor distribution of deposits.
    pub processor_mix: ProcessorMix,

    /// Daily-balance statistics and NSF activity.
    pub liquidity: LiquidityStats,

    /// Detected recurring bills.
    pub recurring_bills: Vec<RecurringBill>,

    /// Detected loan-payment patterns.
    pub loan_signals: Vec<LoanSignal>,

    /// Per-bucket totals, descending.
    pub bucket_breakdown: Vec<BucketBreakdown>,

    /// Monthly activity rollup, ascending by month.
    pub monthly_rollup: Vec<MonthlyRollup>,

    /// Red-flag counters.
    pub red_flags: RedFlags,
}

impl UnderwritingMetrics {
    /// Calculates the full metrics aggregate.
    ///
    /// The transaction list is bucketed once and shared read-only by every
    /// analyzer. `loan_terms` enables the pro-forma debt scenario.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::EmptyTransactions`] when `transactions` is
    /// empty; every other edge degrades inside the individual analyzers.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use solvency_analytics::prelude::*;
    ///
    /// let metrics = UnderwritingMetrics::calculate(&txns, None, &AnalyticsConfig::default())?;
    /// println!("net cash flow: {}", metrics.cash_flow.net_cash_flow);
    /// println!("DSCR: {:?}", metrics.debt.dscr_existing);
    /// ```
    pub fn calculate(
        transactions: &[TransactionRecord],
        loan_terms: Option<&LoanTerms>,
        config: &AnalyticsConfig,
    ) -> AnalyticsResult<Self> {
        if transactions.is_empty() {
            return Err(AnalyticsError::EmptyTransactions);
        }

        let buckets = bucket_transactions(transactions);

        let cash_flow = calculate_cash_flow_metrics(transactions, &buckets, config);
        let debt = calculate_debt_metrics(&buckets, cash_flow.net_cash_flow, loan_terms);
        let (liquidity_in, liquidity_out) = super::liquidity_flows(&buckets);

        let transaction_count = transactions.len();
        let total_amount: Decimal = transactions.iter().map(|t| t.amount).sum();
        let average_transaction_size = total_amount / Decimal::from(transaction_count as u64);

        let monthly_rollup = calculate_monthly_rollup(transactions);
        let stability = calculate_stability_stats(transactions, &monthly_rollup);
        let processor_mix = analyze_processor_mix(transactions);
        let liquidity = calculate_liquidity_stats(transactions);
        let recurring_bills = detect_recurring_bills(transactions);
        let loan_signals = detect_loan_signals(transactions);
        let bucket_breakdown = bucket_breakdown(&buckets);
        let red_flags = detect_red_flags(transactions);

        Ok(Self {
            cash_flow,
            debt,
            liquidity_in,
            liquidity_out,
            transaction_count,
            average_transaction_size,
            stability,
            processor_mix,
            liquidity,
            recurring_bills,
            loan_signals,
            bucket_breakdown,
            monthly_rollup,
            red_flags,
        })
    }

    /// Calculates metrics per calendar month.
    ///
    /// Groups the input by `"YYYY-MM"` and runs the single-call path over
    /// each group (without a loan scenario). Empty input yields an empty
    /// map.
    ///
    /// # Errors
    ///
    /// Propagates analyzer errors; none occur for the per-month groups,
    /// which are nonempty by construction.
    pub fn calculate_by_month(
        transactions: &[TransactionRecord],
        config: &AnalyticsConfig,
    ) -> AnalyticsResult<BTreeMap<String, Self>> {
        let mut groups: BTreeMap<String, Vec<TransactionRecord>> = BTreeMap::new();
        for t in transactions {
            groups.entry(month_label(t)).or_default().push(t.clone());
        }

        let mut results = BTreeMap::new();
        for (ym, group) in groups {
            results.insert(ym, Self::calculate(&group, None, config)?);
        }
        Ok(results)
    }

    /// Net cash flow shortcut.
    #[must_use]
    pub fn net_cash_flow(&self) -> Decimal {
        self.cash_flow.net_cash_flow
    }

    /// Existing-debt DSCR shortcut.
    #[must_use]
    pub fn dscr_existing(&self) -> Option<f64> {
        self.debt.dscr_existing
    }
}

/// Convenience function to calculate underwriting metrics.
///
/// # Errors
///
/// Returns [`AnalyticsError::EmptyTransactions`] for an empty input list.
pub fn calculate_underwriting_metrics(
    transactions: &[TransactionRecord],
    loan_terms: Option<&LoanTerms>,
    config: &AnalyticsConfig,
) -> AnalyticsResult<UnderwritingMetrics> {
    UnderwritingMetrics::calculate(transactions, loan_terms, config)
}
