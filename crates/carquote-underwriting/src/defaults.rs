//! Underwriting defaults resolved once at startup
//!
//! The calculator never reads the environment. Whoever loads configuration
//! builds an [`UnderwritingDefaults`] and passes it into every quote call.

use carquote_common::{CurrencyCode, Percentage, QuoteError, Result};
use serde::Serialize;

/// Fallback values for fields a quote request leaves out
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnderwritingDefaults {
    /// Currency for car values submitted without one
    pub currency: CurrencyCode,
    /// Base rate applied to the car value to get the premium
    pub base_rate: Percentage,
    /// Share of the car value that is covered
    pub coverage: Percentage,
}

impl UnderwritingDefaults {
    /// Build defaults, rejecting a coverage share above 100%
    pub fn new(currency: CurrencyCode, base_rate: Percentage, coverage: Percentage) -> Result<Self> {
        if !coverage.is_within_unit() {
            return Err(QuoteError::CoverageOutOfRange {
                value: coverage.value(),
            });
        }

        Ok(Self {
            currency,
            base_rate,
            coverage,
        })
    }

    /// Currency given by the caller, or the configured default
    pub fn resolve_currency(&self, requested: Option<&str>) -> Result<CurrencyCode> {
        match requested {
            Some(code) => CurrencyCode::new(code),
            None => Ok(self.currency.clone()),
        }
    }
}
