//! Statement-balance reconciliation.
//!
//! Verifies that opening balance plus net transaction change lands on the
//! closing balance, to the cent. This check never fails with an error:
//! missing balances simply report as unreconciled.

use rust_decimal::Decimal;
use tracing::warn;

use solvency_core::{Direction, StatementSummary, TransactionRecord};

/// Maximum tolerated difference: exact-cent match required.
const TOLERANCE: Decimal = Decimal::ZERO;

/// Checks whether a statement balances.
///
/// `net = sum(credits) - sum(debits)`; balanced iff
/// `|opening + net - closing| <= 0.00`. Missing opening or closing balance
/// reports `false`. An empty transaction list is a valid zero-net statement,
/// so it reconciles exactly when the balances are equal.
#[must_use]
pub fn reconcile(
    opening: Option<Decimal>,
    closing: Option<Decimal>,
    transactions: &[TransactionRecord],
) -> bool {
    let (Some(opening), Some(closing)) = (opening, closing) else {
        return false;
    };

    let mut net_change = Decimal::ZERO;
    for t in transactions {
        match t.direction {
            Direction::Credit => net_change += t.amount,
            Direction::Debit => net_change -= t.amount,
        }
    }

    let expected_closing = opening + net_change;
    let difference = (expected_closing - closing).abs();
    let is_balanced = difference <= TOLERANCE;

    if !is_balanced {
        warn!(
            %opening,
            %net_change,
            %expected_closing,
            %closing,
            %difference,
            "statement reconciliation mismatch"
        );
    }

    is_balanced
}

/// Checks a statement's own balances against its transactions.
#[must_use]
pub fn reconcile_statement(statement: &StatementSummary, transactions: &[TransactionRecord]) -> bool {
    reconcile(
        statement.opening_balance,
        statement.closing_balance,
        transactions,
    )
}
