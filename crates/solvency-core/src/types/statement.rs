//! Statement-level metadata.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Metadata extracted from one bank statement.
///
/// The analytics engine only consumes the balances (for reconciliation); the
/// identity fields travel along for the surrounding API layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementSummary {
    /// Reference to the source document.
    pub document_id: String,

    /// Issuing bank.
    pub bank_name: String,

    /// Account holder name as printed.
    pub account_holder: String,

    /// Account number (typically masked).
    pub account_number: String,

    /// First day covered by the statement.
    pub period_start: NaiveDate,

    /// Last day covered by the statement.
    pub period_end: NaiveDate,

    /// Opening balance, if the statement states one.
    pub opening_balance: Option<Decimal>,

    /// Closing balance, if the statement states one.
    pub closing_balance: Option<Decimal>,
}
