//! The underwriting analyzers.
//!
//! Each submodule pairs one analytical algorithm with the value struct it
//! produces:
//! - Cash flow (income/expense totals, margin, expense ratios)
//! - Debt service (EDS, amortized pro-forma payment, DSCR, loan signals)
//! - Liquidity (daily-balance statistics, NSF/overdraft detection)
//! - Stability (monthly rollup, deposit variability/trend, payer
//!   concentration, processor mix)
//! - Recurring bills (merchant/category cadence and confidence)
//! - Red flags (chargeback/gambling/cash heuristics)
//! - Summary (the orchestrated [`UnderwritingMetrics`] aggregate)
//!
//! All functions are pure - they take the transaction list (and the shared
//! bucket partition) as input and return computed results. No caching, no
//! I/O, no side effects.

mod cash_flow;
mod debt;
mod liquidity;
mod recurring;
mod risk_flags;
mod stability;
mod summary;

pub use cash_flow::*;
pub use debt::*;
pub use liquidity::*;
pub use recurring::*;
pub use risk_flags::*;
pub use stability::*;
pub use summary::*;
