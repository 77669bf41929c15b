//! Core domain types.
//!
//! - [`Category`] / [`RiskBucket`]: closed classification enumerations
//! - [`TransactionRecord`]: an immutable classified bank transaction
//! - [`StatementSummary`]: statement-level metadata for reconciliation
//! - [`Cadence`]: inferred payment frequency

mod cadence;
mod category;
mod statement;
mod transaction;

pub use cadence::Cadence;
pub use category::{Category, RiskBucket};
pub use statement::StatementSummary;
pub use transaction::{Direction, TransactionBuilder, TransactionRecord};
