//! Request and response schemas for the insurance endpoint
//!
//! Field-level checks (string lengths, year range, decimal precision) live
//! here and answer with 422. Business rules stay in the domain crates and
//! answer with 400.

use carquote_common::{Car, CarAttributes, Money, Percentage, QuoteError};
use carquote_underwriting::{InsuranceQuote, QuoteRequest, UnderwritingDefaults};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Earliest accepted model year
pub const MIN_YEAR: i32 = 1900;

/// Most decimal places accepted for monetary input
pub const MONEY_SCALE: u32 = 2;

/// Most significant digits accepted for a car value
pub const MAX_VALUE_DIGITS: u32 = 12;

/// Most significant digits accepted for a broker fee
pub const MAX_FEE_DIGITS: u32 = 10;

/// Request field validation errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must be between {min} and {max} characters")]
    Length {
        field: &'static str,
        min: usize,
        max: usize,
    },

    #[error("year must be between {min} and {max}")]
    Year { min: i32, max: i32 },

    #[error("{field} must have at most {max} decimal places")]
    Precision { field: &'static str, max: u32 },

    #[error("{field} must have at most {max} digits")]
    Digits { field: &'static str, max: u32 },
}

/// Body of `POST /api/v1/insurance/calculate`
///
/// Decimals are accepted as JSON strings or numbers. Omitted rates fall back
/// to the configured defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct InsuranceRequest {
    /// Vehicle manufacturer
    pub make: String,
    /// Vehicle model
    pub model: String,
    /// Model year
    pub year: i32,
    /// Current market value
    pub value: Decimal,
    /// Currency of `value` and `broker_fee`
    pub currency: Option<String>,
    /// Base rate override (0.005 = 0.5%)
    pub base_rate: Option<Decimal>,
    /// Coverage share override (0.0 - 1.0)
    pub coverage_percentage: Option<Decimal>,
    /// Deductible share of the coverage amount (0.0 - 1.0)
    pub deductible_percentage: Option<Decimal>,
    /// Broker commission added to the premium
    pub broker_fee: Option<Decimal>,
}

impl InsuranceRequest {
    /// Check field shapes against `current_year`
    pub fn validate(&self, current_year: i32) -> Result<(), ValidationError> {
        check_length("make", &self.make, 2, 50)?;
        check_length("model", &self.model, 1, 50)?;

        if !(MIN_YEAR..=current_year).contains(&self.year) {
            return Err(ValidationError::Year {
                min: MIN_YEAR,
                max: current_year,
            });
        }

        check_money("value", self.value, MAX_VALUE_DIGITS)?;
        if let Some(fee) = self.broker_fee {
            check_money("broker_fee", fee, MAX_FEE_DIGITS)?;
        }

        Ok(())
    }

    /// Turn the payload into a domain quote request
    pub fn into_quote_request(
        self,
        defaults: &UnderwritingDefaults,
    ) -> Result<QuoteRequest, QuoteError> {
        let currency = defaults.resolve_currency(self.currency.as_deref())?;
        let attributes = CarAttributes::new(self.make, self.model, self.year);
        let car = Car::from_amount(self.value, &currency, attributes)?;

        let mut request = QuoteRequest::new(car);
        if let Some(rate) = self.base_rate {
            request = request.with_base_rate(Percentage::new(rate)?);
        }
        if let Some(coverage) = self.coverage_percentage {
            request = request.with_coverage(Percentage::new(coverage)?);
        }
        if let Some(deductible) = self.deductible_percentage {
            request = request.with_deductible(Percentage::new(deductible)?);
        }
        if let Some(fee) = self.broker_fee {
            request = request.with_broker_fee(Money::new(fee, &currency)?);
        }

        Ok(request)
    }
}

fn check_length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let len = value.trim().chars().count();
    if len < min || len > max {
        return Err(ValidationError::Length { field, min, max });
    }
    Ok(())
}

fn check_money(field: &'static str, value: Decimal, max_digits: u32) -> Result<(), ValidationError> {
    let normalized = value.normalize();
    if normalized.scale() > MONEY_SCALE {
        return Err(ValidationError::Precision {
            field,
            max: MONEY_SCALE,
        });
    }

    let digits = normalized.mantissa().unsigned_abs().to_string().len() as u32;
    if digits > max_digits {
        return Err(ValidationError::Digits {
            field,
            max: max_digits,
        });
    }
    Ok(())
}

/// Monetary amount as returned to clients
#[derive(Debug, Clone, Serialize)]
pub struct MoneyBody {
    /// Amount with exactly two decimals (e.g., "1200.00")
    pub amount: String,
    /// ISO currency code
    pub currency: String,
    /// Display form (e.g., "USD 1,200.00")
    pub formatted: String,
}

impl From<&Money> for MoneyBody {
    fn from(money: &Money) -> Self {
        Self {
            amount: format!("{:.2}", money.amount()),
            currency: money.currency().to_string(),
            formatted: money.to_string(),
        }
    }
}

/// Vehicle echoed back in the response
#[derive(Debug, Clone, Serialize)]
pub struct VehicleBody {
    pub make: String,
    pub model: String,
    pub year: i32,
    /// Whole years since the model year
    pub age: Option<u32>,
    pub value: MoneyBody,
}

/// Body returned by `POST /api/v1/insurance/calculate`
#[derive(Debug, Clone, Serialize)]
pub struct InsuranceResponse {
    pub vehicle: VehicleBody,
    /// Total premium, broker fee included
    pub premium: MoneyBody,
    /// Insured amount
    pub coverage_amount: MoneyBody,
    /// Base rate as a percentage (e.g., "0.50%")
    pub applied_rate: String,
    /// Coverage share as a percentage (e.g., "80.00%")
    pub coverage_percentage: String,
    /// Premium before the broker fee
    pub base_premium: MoneyBody,
    pub broker_fee: MoneyBody,
    /// Deductible share as a percentage
    pub deductible_percentage: String,
    /// Deductible owed on a claim
    pub deductible: MoneyBody,
}

impl InsuranceResponse {
    pub fn from_quote(car: &Car, quote: &InsuranceQuote, current_year: i32) -> Self {
        let attributes = car.attributes();
        let breakdown = &quote.breakdown;

        Self {
            vehicle: VehicleBody {
                make: attributes.make.clone(),
                model: attributes.model.clone(),
                year: attributes.year,
                age: car.age_at(current_year),
                value: car.value().into(),
            },
            premium: (&quote.premium).into(),
            coverage_amount: (&quote.coverage_amount).into(),
            applied_rate: breakdown.applied_rate.to_string(),
            coverage_percentage: breakdown.coverage_percentage.to_string(),
            base_premium: (&breakdown.base_premium).into(),
            broker_fee: (&breakdown.broker_fee).into(),
            deductible_percentage: breakdown.deductible_percentage.to_string(),
            deductible: (&breakdown.deductible).into(),
        }
    }
}
