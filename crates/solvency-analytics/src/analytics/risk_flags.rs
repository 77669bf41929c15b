//! Red-flag heuristics.
//!
//! Case-insensitive description scans for chargeback activity,
//! gambling/crypto exposure, large cash withdrawals, and round-number cash
//! deposits. The counters are independent: one transaction may trigger
//! several flags.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use solvency_core::{Direction, TransactionRecord};

const CHARGEBACK_KEYWORDS: [&str; 4] = ["chargeback", "return item", "reversal", "ach r0"];
const GAMBLING_CRYPTO_KEYWORDS: [&str; 6] = ["casino", "bet", "gambl", "crypto", "coinbase", "binance"];
const CASH_KEYWORDS: [&str; 2] = ["cash", "atm"];

/// Red-flag counters over one statement window.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RedFlags {
    /// Chargeback/reversal/returned-item mentions.
    pub chargebacks_count: u32,

    /// Gambling or crypto-exchange mentions.
    pub gambling_crypto_hits: u32,

    /// Cash/ATM debits of at least $1,000.
    pub large_cash_withdrawals: u32,

    /// Cash/ATM credits of at least $500 in exact $100 multiples.
    pub round_number_cash_deposits: u32,
}

/// Scans transactions for red flags.
#[must_use]
pub fn detect_red_flags(transactions: &[TransactionRecord]) -> RedFlags {
    let mut flags = RedFlags::default();

    for t in transactions {
        let description = t.description.to_lowercase();
        let contains_any = |keywords: &[&str]| keywords.iter().any(|k| description.contains(k));

        if contains_any(&CHARGEBACK_KEYWORDS) {
            flags.chargebacks_count += 1;
        }

        if contains_any(&GAMBLING_CRYPTO_KEYWORDS) {
            flags.gambling_crypto_hits += 1;
        }

        if t.direction == Direction::Debit
            && contains_any(&CASH_KEYWORDS)
            && t.amount >= dec!(1000)
        {
            flags.large_cash_withdrawals += 1;
        }

        if t.direction == Direction::Credit
            && contains_any(&CASH_KEYWORDS)
            && is_round_hundred(t.amount)
            && t.amount >= dec!(500)
        {
            flags.round_number_cash_deposits += 1;
        }
    }

    flags
}

fn is_round_hundred(amount: Decimal) -> bool {
    (amount % Decimal::ONE_HUNDRED).is_zero()
}
