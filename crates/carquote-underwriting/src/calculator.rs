//! Insurance calculator
//!
//! Stateless use case turning a car and two ratios into a quote. It holds no
//! data, so one instance can be shared by any number of concurrent callers.

use carquote_common::{Car, Percentage, QuoteError, Result};
use tracing::{debug, instrument};

use crate::defaults::UnderwritingDefaults;
use crate::quote::{InsuranceQuote, QuoteRequest};

/// Premium and coverage calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct InsuranceCalculator;

impl InsuranceCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Price a car at `base_rate` with `coverage` of its value insured
    ///
    /// Fails with [`QuoteError::CoverageOutOfRange`] when coverage exceeds
    /// 100%. No partial quote is ever returned.
    #[instrument(skip(self, car), fields(car = %car))]
    pub fn calculate(
        &self,
        car: &Car,
        base_rate: &Percentage,
        coverage: &Percentage,
    ) -> Result<InsuranceQuote> {
        if !coverage.is_within_unit() {
            return Err(QuoteError::CoverageOutOfRange {
                value: coverage.value(),
            });
        }

        let premium = base_rate.apply(car.value())?;
        let coverage_amount = coverage.apply(car.value())?;

        debug!(%premium, %coverage_amount, "Calculated quote");

        Ok(InsuranceQuote::plain(
            premium,
            coverage_amount,
            *base_rate,
            *coverage,
        ))
    }

    /// Resolve a request against `defaults`, then apply broker fee and deductible
    #[instrument(skip(self, request, defaults), fields(car = %request.car))]
    pub fn quote(
        &self,
        request: &QuoteRequest,
        defaults: &UnderwritingDefaults,
    ) -> Result<InsuranceQuote> {
        let base_rate = request.base_rate.unwrap_or(defaults.base_rate);
        let coverage = request.coverage.unwrap_or(defaults.coverage);
        let deductible_percentage = request.deductible.unwrap_or(Percentage::ZERO);

        let mut quote = self.calculate(&request.car, &base_rate, &coverage)?;

        if !deductible_percentage.is_within_unit() {
            return Err(QuoteError::DeductibleOutOfRange {
                value: deductible_percentage.value(),
            });
        }

        if let Some(fee) = &request.broker_fee {
            quote.premium = quote.breakdown.base_premium.add(fee)?;
            quote.breakdown.broker_fee = fee.clone();
        }

        quote.breakdown.deductible = deductible_percentage.apply(&quote.coverage_amount)?;
        quote.breakdown.deductible_percentage = deductible_percentage;

        debug!(
            premium = %quote.premium,
            deductible = %quote.breakdown.deductible,
            "Applied broker fee and deductible"
        );

        Ok(quote)
    }
}
