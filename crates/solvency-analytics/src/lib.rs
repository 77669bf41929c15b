//! # Solvency Analytics
//!
//! Loan-underwriting risk and cash-flow metrics from classified bank
//! transactions.
//!
//! Given transactions already tagged with a spending/income category, this
//! crate produces cash-flow ratios, debt-service coverage, liquidity and
//! overdraft signals, income-stability statistics, payment-processor mix,
//! recurring-bill and loan-payment patterns, red-flag heuristics, a
//! statement-balance reconciliation check, and a composite risk score.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: All calculations are stateless with explicit inputs;
//!   no I/O, no persistence, no network.
//! - **Pre-classified input**: The caller supplies categories; this engine
//!   only decides what each category implies for risk bucketing and
//!   aggregates.
//! - **Degrade, don't fail**: Zero denominators resolve to `0.0`/`None`,
//!   missing optional fields drop the dependent statistic. The only error is
//!   an empty input list at the orchestrator.
//! - **Reproducible output**: Normalized grouping keys and specified sort
//!   tie-breaks make repeated runs over the same input bit-identical.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use solvency_analytics::prelude::*;
//!
//! let config = AnalyticsConfig::default();
//! let metrics = UnderwritingMetrics::calculate(&transactions, None, &config)?;
//!
//! println!("net cash flow: {}", metrics.cash_flow.net_cash_flow);
//! println!("DSCR: {:?}", metrics.debt.dscr_existing);
//! println!("risk score: {}", score_risk(&transactions).score);
//! ```
//!
//! ## Module Overview
//!
//! - [`analytics`] - The analyzers (cash flow, debt, liquidity, stability,
//!   recurring bills, red flags) and the orchestrated summary
//! - [`bucketing`] - Risk-bucket partitioning and per-bucket breakdown
//! - [`reconciliation`] - Statement-balance reconciliation check
//! - [`scoring`] - Composite 0-100 risk score
//! - [`config`] - Computation configuration
//! - [`error`] - Error types
//!
//! ## Feature Flags
//!
//! - `parallel`: Enable rayon-based parallel folds for large transaction
//!   lists

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

// Module declarations
pub mod analytics;
pub mod bucketing;
pub mod config;
pub mod error;
pub mod parallel;
pub mod reconciliation;
pub mod scoring;
mod stats;

// Re-export error types at crate root
pub use error::{AnalyticsError, AnalyticsResult};

// Re-export configuration
pub use config::AnalyticsConfig;

// Re-export analytics types and functions
pub use analytics::{
    // Stability / processor mix
    analyze_processor_mix,
    // Cash flow
    calculate_cash_flow_metrics,
    // Debt
    calculate_debt_metrics,
    // Liquidity
    calculate_liquidity_stats,
    calculate_monthly_rollup,
    calculate_stability_stats,
    // Summary
    calculate_underwriting_metrics,
    amortized_payment,
    detect_loan_signals,
    // Recurring bills
    detect_recurring_bills,
    // Red flags
    detect_red_flags,
    liquidity_flows,
    CashFlowMetrics,
    DebtMetrics,
    LiquidityStats,
    LoanSignal,
    LoanTerms,
    MonthlyRollup,
    ProcessorMix,
    RecurringBill,
    RedFlags,
    StabilityStats,
    UnderwritingMetrics,
};

// Re-export bucketing types and functions
pub use bucketing::{bucket_breakdown, bucket_transactions, BucketBreakdown, BucketMap};

// Re-export parallel utilities
pub use parallel::maybe_parallel_fold;

// Re-export reconciliation
pub use reconciliation::{reconcile, reconcile_statement};

// Re-export risk scoring
pub use scoring::{score_risk, RiskRating, RiskScore};

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use solvency_analytics::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{AnalyticsError, AnalyticsResult};

    // Config
    pub use crate::config::AnalyticsConfig;

    // Analytics
    pub use crate::analytics::{
        calculate_underwriting_metrics, CashFlowMetrics, DebtMetrics, LiquidityStats, LoanSignal,
        LoanTerms, MonthlyRollup, ProcessorMix, RecurringBill, RedFlags, StabilityStats,
        UnderwritingMetrics,
    };

    // Bucketing
    pub use crate::bucketing::{bucket_breakdown, bucket_transactions, BucketBreakdown};

    // Reconciliation
    pub use crate::reconciliation::{reconcile, reconcile_statement};

    // Risk scoring
    pub use crate::scoring::{score_risk, RiskRating, RiskScore};

    // Re-export commonly used types from dependencies
    pub use rust_decimal::Decimal;
    pub use solvency_core::{
        bucket_of, validate_mapping, Cadence, Category, Direction, RiskBucket, StatementSummary,
        TransactionRecord,
    };
}
