//! Car - Insured vehicle entity
//!
//! Only the insured value takes part in premium calculation. Make, model and
//! year ride along untouched for the response and for future risk rating.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money::Money;
use crate::error::{QuoteError, Result};

/// Identifying attributes of a vehicle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarAttributes {
    /// Manufacturer (e.g., "Toyota")
    pub make: String,
    /// Model name (e.g., "Corolla")
    pub model: String,
    /// Model year
    pub year: i32,
}

impl CarAttributes {
    pub fn new(make: impl Into<String>, model: impl Into<String>, year: i32) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            year,
        }
    }
}

/// Vehicle with a strictly positive insured value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Car {
    value: Money,
    attributes: CarAttributes,
}

impl Car {
    /// Create a car, rejecting a zero insured value
    pub fn new(value: Money, attributes: CarAttributes) -> Result<Self> {
        if value.amount() <= Decimal::ZERO {
            return Err(QuoteError::InvalidCarValue {
                amount: value.amount(),
            });
        }
        Ok(Self { value, attributes })
    }

    /// Create a car from a raw amount. Any amount `<= 0` is reported as
    /// [`QuoteError::InvalidCarValue`] rather than a money error.
    pub fn from_amount(
        amount: Decimal,
        currency: impl AsRef<str>,
        attributes: CarAttributes,
    ) -> Result<Self> {
        if amount <= Decimal::ZERO {
            return Err(QuoteError::InvalidCarValue { amount });
        }
        Self::new(Money::new(amount, currency)?, attributes)
    }

    /// Insured value
    #[inline]
    pub fn value(&self) -> &Money {
        &self.value
    }

    #[inline]
    pub fn attributes(&self) -> &CarAttributes {
        &self.attributes
    }

    /// Age in whole years at `reference_year`, `None` for a future model year
    pub fn age_at(&self, reference_year: i32) -> Option<u32> {
        let age = reference_year.checked_sub(self.attributes.year)?;
        u32::try_from(age).ok()
    }
}

impl std::fmt::Display for Car {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.attributes.year, self.attributes.make, self.attributes.model, self.value
        )
    }
}
