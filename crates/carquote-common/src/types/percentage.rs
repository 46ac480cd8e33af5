//! Percentage - Non-negative ratios where `1.0` means 100%
//!
//! Percentages carry no upper bound of their own. Rules that need one (the
//! coverage cap, the deductible cap) check [`Percentage::is_within_unit`] at
//! the point of use.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money::Money;
use crate::error::{QuoteError, Result};

/// Immutable ratio used to scale [`Money`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Percentage(Decimal);

impl Percentage {
    /// 0%
    pub const ZERO: Percentage = Percentage(Decimal::ZERO);

    /// 100%
    pub const FULL: Percentage = Percentage(Decimal::ONE);

    /// Create a percentage from a fraction (`0.15` = 15%)
    pub fn new(value: Decimal) -> Result<Self> {
        if value < Decimal::ZERO {
            return Err(QuoteError::InvalidPercentage { value });
        }
        Ok(Self(value))
    }

    #[inline]
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Whether the ratio lies in `[0, 1]`
    #[inline]
    pub fn is_within_unit(&self) -> bool {
        self.0 <= Decimal::ONE
    }

    /// Scale an amount by this ratio. Same as `money.scale(self)`.
    pub fn apply(&self, money: &Money) -> Result<Money> {
        money.scale(self)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.checked_mul(Decimal::ONE_HUNDRED) {
            Some(hundredths) => write!(f, "{:.2}%", hundredths.round_dp(2)),
            None => {
                // Past Decimal's range the ratio has at most two decimals,
                // so shifting the point by hand stays exact
                let fixed = format!("{:.2}", self.0);
                let digits: String = fixed.chars().filter(|c| *c != '.').collect();
                write!(f, "{}.00%", digits)
            }
        }
    }
}

impl TryFrom<Decimal> for Percentage {
    type Error = QuoteError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Percentage> for Decimal {
    fn from(value: Percentage) -> Self {
        value.0
    }
}
