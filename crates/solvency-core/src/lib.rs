//! # Solvency Core
//!
//! Domain types for bank-statement underwriting analytics.
//!
//! This crate defines the vocabulary consumed by `solvency-analytics`:
//! classified bank transactions, the closed category and risk-bucket
//! enumerations, the canonical category-to-bucket table, statement metadata,
//! and payment cadence.
//!
//! ## Design Philosophy
//!
//! - **Immutable values**: A [`TransactionRecord`] is constructed once its
//!   category is known (via [`TransactionBuilder`]) and never mutated.
//! - **Explicit optionality**: Merchant, running balance, and post timestamp
//!   are `Option` fields in a fixed schema, never probed at runtime.
//! - **Table-driven bucketing**: Risk-bucket membership is always resolved
//!   through [`bucket_of`], never through a property assumed to exist on the
//!   category.
//!
//! ## Quick Start
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use solvency_core::{bucket_of, Category, Direction, RiskBucket, TransactionRecord};
//!
//! let txn = TransactionRecord::builder()
//!     .document_id("doc-1")
//!     .date_ymd(2025, 3, 14)
//!     .amount(Decimal::new(125000, 2))
//!     .description("ACME PAYROLL DEPOSIT")
//!     .direction(Direction::Credit)
//!     .category(Category::SalaryWages)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(txn.bucket(), RiskBucket::Income);
//! assert_eq!(bucket_of(Category::Rent), RiskBucket::OperatingExpense);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod buckets;
pub mod error;
pub mod types;

pub use buckets::{bucket_of, validate_mapping};
pub use error::{CoreError, CoreResult};
pub use types::{
    Cadence, Category, Direction, RiskBucket, StatementSummary, TransactionBuilder,
    TransactionRecord,
};
