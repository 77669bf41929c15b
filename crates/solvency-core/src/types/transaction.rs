//! Classified bank transaction record.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Category, RiskBucket};
use crate::buckets::bucket_of;
use crate::error::{CoreError, CoreResult};

/// Direction of a transaction relative to the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Outflow.
    Debit,
    /// Inflow.
    Credit,
}

/// A single classified bank-account transaction.
///
/// Amounts are non-negative magnitudes; [`Direction`] carries the sign
/// semantics (debit = outflow, credit = inflow). Records are immutable for
/// the duration of an analysis: build one with [`TransactionRecord::builder`]
/// once its category is known.
///
/// Optional fields (merchant, running balance, post timestamp) are explicit
/// in the schema; analytics that depend on them degrade to `None`/0/
/// `"unknown"` when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Reference to the source document.
    pub document_id: String,

    /// Transaction date.
    pub date: NaiveDate,

    /// Non-negative monetary magnitude.
    pub amount: Decimal,

    /// Free-text description from the statement.
    pub description: String,

    /// Debit (outflow) or credit (inflow).
    pub direction: Direction,

    /// Assigned category; [`Category::Error`] when classification failed.
    pub category: Category,

    /// Merchant or counterparty name, if extracted.
    pub merchant: Option<String>,

    /// Running account balance after this transaction, if the statement
    /// carries one.
    pub balance_after: Option<Decimal>,

    /// Posting timestamp, if available (finer-grained than `date`).
    pub posted_at: Option<NaiveDateTime>,
}

impl TransactionRecord {
    /// Starts building a record.
    #[must_use]
    pub fn builder() -> TransactionBuilder {
        TransactionBuilder::new()
    }

    /// Resolves this record's risk bucket through the canonical
    /// category-to-bucket table.
    #[must_use]
    pub fn bucket(&self) -> RiskBucket {
        bucket_of(self.category)
    }

    /// Returns true if this transaction is a liquidity movement (transfer),
    /// which is excluded from cash-flow totals.
    #[must_use]
    pub fn is_transfer(&self) -> bool {
        self.bucket() == RiskBucket::LiquidityMovement
    }

    /// Returns the amount signed by direction: credits positive, debits
    /// negative.
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        match self.direction {
            Direction::Credit => self.amount,
            Direction::Debit => -self.amount,
        }
    }

    /// Normalized merchant key for grouping: trimmed and lower-cased, empty
    /// when no merchant is present.
    ///
    /// Every grouping in the engine (payers, lenders, recurring bills) goes
    /// through this key so repeated runs produce identical groupings.
    #[must_use]
    pub fn merchant_key(&self) -> String {
        self.merchant
            .as_deref()
            .unwrap_or("")
            .trim()
            .to_lowercase()
    }

    /// Sort key for intra-day ordering: the posting timestamp when present,
    /// otherwise midnight of the transaction date.
    #[must_use]
    pub fn posted_or_midnight(&self) -> NaiveDateTime {
        self.posted_at
            .unwrap_or_else(|| self.date.and_time(NaiveTime::MIN))
    }
}

/// Builder for [`TransactionRecord`].
///
/// `document_id`, `date`, `amount`, `description`, and `direction` are
/// required; `build` keeps the amount invariant by storing its absolute
/// value. Category defaults to the [`Category::Error`] sentinel so an
/// unclassified record still buckets to `Other`.
#[derive(Debug, Clone, Default)]
pub struct TransactionBuilder {
    document_id: Option<String>,
    date: Option<NaiveDate>,
    amount: Option<Decimal>,
    description: Option<String>,
    direction: Option<Direction>,
    category: Category,
    merchant: Option<String>,
    balance_after: Option<Decimal>,
    posted_at: Option<NaiveDateTime>,
}

impl TransactionBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source document reference.
    #[must_use]
    pub fn document_id(mut self, id: impl Into<String>) -> Self {
        self.document_id = Some(id.into());
        self
    }

    /// Sets the transaction date.
    #[must_use]
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Sets the transaction date from year/month/day.
    ///
    /// # Panics
    ///
    /// Panics on an invalid calendar date; intended for literals.
    #[must_use]
    pub fn date_ymd(self, year: i32, month: u32, day: u32) -> Self {
        self.date(NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date"))
    }

    /// Sets the monetary magnitude.
    #[must_use]
    pub fn amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Sets the statement description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the direction.
    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Sets the assigned category.
    #[must_use]
    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Sets the merchant name.
    #[must_use]
    pub fn merchant(mut self, merchant: impl Into<String>) -> Self {
        self.merchant = Some(merchant.into());
        self
    }

    /// Sets the running balance after this transaction.
    #[must_use]
    pub fn balance_after(mut self, balance: Decimal) -> Self {
        self.balance_after = Some(balance);
        self
    }

    /// Sets the posting timestamp.
    #[must_use]
    pub fn posted_at(mut self, posted_at: NaiveDateTime) -> Self {
        self.posted_at = Some(posted_at);
        self
    }

    /// Builds the record, keeping the amount invariant by storing its
    /// absolute value.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingField`] when a required field was not
    /// set.
    pub fn build(self) -> CoreResult<TransactionRecord> {
        Ok(TransactionRecord {
            document_id: self
                .document_id
                .ok_or_else(|| CoreError::missing_field("document_id"))?,
            date: self.date.ok_or_else(|| CoreError::missing_field("date"))?,
            amount: self
                .amount
                .ok_or_else(|| CoreError::missing_field("amount"))?
                .abs(),
            description: self
                .description
                .ok_or_else(|| CoreError::missing_field("description"))?,
            direction: self
                .direction
                .ok_or_else(|| CoreError::missing_field("direction"))?,
            category: self.category,
            merchant: self.merchant,
            balance_after: self.balance_after,
            posted_at: self.posted_at,
        })
    }
}
