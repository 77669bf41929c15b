//! Error types for the underwriting metrics engine.

use thiserror::Error;

/// Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Errors that can occur while computing underwriting metrics.
///
/// Deliberately small: almost everything in this engine degrades instead of
/// failing (zero denominators become 0.0 or `None`, missing optional fields
/// drop the dependent statistic). The orchestrator's empty-input case is the
/// only fatal condition.
#[derive(Error, Debug, Clone)]
pub enum AnalyticsError {
    /// The orchestrator was called with no transactions.
    #[error("no transactions provided")]
    EmptyTransactions,

    /// Invalid analysis input.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// The reason the input is invalid.
        reason: String,
    },
}

impl AnalyticsError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
