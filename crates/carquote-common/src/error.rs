//! Error types for CarQuote
//!
//! Every failure in the domain layer is a deterministic input error. None of
//! them is transient, so callers surface them instead of retrying.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias using QuoteError
pub type Result<T> = std::result::Result<T, QuoteError>;

/// Unified error type for money, percentage, car and quote operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuoteError {
    #[error("Invalid amount: {amount} must not be negative")]
    InvalidAmount { amount: Decimal },

    #[error("Invalid currency code: {code:?} must be three ASCII letters")]
    InvalidCurrency { code: String },

    #[error("Currency mismatch: {left} vs {right}")]
    CurrencyMismatch { left: String, right: String },

    #[error("Invalid percentage: {value} must not be negative")]
    InvalidPercentage { value: Decimal },

    #[error("Invalid car value: {amount} must be greater than zero")]
    InvalidCarValue { amount: Decimal },

    #[error("Coverage percentage {value} is outside [0, 1]")]
    CoverageOutOfRange { value: Decimal },

    #[error("Deductible percentage {value} is outside [0, 1]")]
    DeductibleOutOfRange { value: Decimal },

    #[error("Monetary calculation overflow")]
    Overflow,
}

impl QuoteError {
    /// Stable machine-readable code for API consumers
    pub fn code(&self) -> &'static str {
        match self {
            QuoteError::InvalidAmount { .. } => "invalid_amount",
            QuoteError::InvalidCurrency { .. } => "invalid_currency",
            QuoteError::CurrencyMismatch { .. } => "currency_mismatch",
            QuoteError::InvalidPercentage { .. } => "invalid_percentage",
            QuoteError::InvalidCarValue { .. } => "invalid_car_value",
            QuoteError::CoverageOutOfRange { .. } => "coverage_out_of_range",
            QuoteError::DeductibleOutOfRange { .. } => "deductible_out_of_range",
            QuoteError::Overflow => "overflow",
        }
    }
}
