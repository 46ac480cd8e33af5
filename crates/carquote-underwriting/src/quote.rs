//! Quote Types - Premium = BaseRate × Value (+ BrokerFee)
//!
//! A quote lives for one request: the calculator creates it, the caller maps
//! it to a response and drops it.

use carquote_common::{Car, Money, Percentage};
use serde::Serialize;

/// Request for a premium quote
///
/// Unset rates fall back to [`crate::UnderwritingDefaults`].
#[derive(Debug, Clone)]
pub struct QuoteRequest {
    /// Vehicle being insured
    pub car: Car,
    /// Base rate override
    pub base_rate: Option<Percentage>,
    /// Coverage share override
    pub coverage: Option<Percentage>,
    /// Deductible share of the coverage amount (0% when unset)
    pub deductible: Option<Percentage>,
    /// Flat broker fee added to the premium (none when unset)
    pub broker_fee: Option<Money>,
}

impl QuoteRequest {
    /// Create a quote request that uses every configured default
    pub fn new(car: Car) -> Self {
        Self {
            car,
            base_rate: None,
            coverage: None,
            deductible: None,
            broker_fee: None,
        }
    }

    /// Set the base rate
    pub fn with_base_rate(mut self, base_rate: Percentage) -> Self {
        self.base_rate = Some(base_rate);
        self
    }

    /// Set the coverage share
    pub fn with_coverage(mut self, coverage: Percentage) -> Self {
        self.coverage = Some(coverage);
        self
    }

    /// Set the deductible share
    pub fn with_deductible(mut self, deductible: Percentage) -> Self {
        self.deductible = Some(deductible);
        self
    }

    /// Add a broker fee
    pub fn with_broker_fee(mut self, fee: Money) -> Self {
        self.broker_fee = Some(fee);
        self
    }
}

/// How a quote was put together
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteBreakdown {
    /// Base rate applied to the car value
    pub applied_rate: Percentage,
    /// Coverage share applied to the car value
    pub coverage_percentage: Percentage,
    /// Premium before fees (base rate × value)
    pub base_premium: Money,
    /// Broker fee included in the premium
    pub broker_fee: Money,
    /// Deductible share of the coverage amount
    pub deductible_percentage: Percentage,
    /// Deductible owed by the insured on a claim
    pub deductible: Money,
}

/// Calculated premium and coverage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsuranceQuote {
    /// Amount the insured pays
    pub premium: Money,
    /// Amount the policy covers
    pub coverage_amount: Money,
    /// Detailed breakdown
    pub breakdown: QuoteBreakdown,
}

impl InsuranceQuote {
    /// Quote with no fee and no deductible
    pub(crate) fn plain(
        premium: Money,
        coverage_amount: Money,
        applied_rate: Percentage,
        coverage_percentage: Percentage,
    ) -> Self {
        let currency = premium.currency().clone();
        Self {
            breakdown: QuoteBreakdown {
                applied_rate,
                coverage_percentage,
                base_premium: premium.clone(),
                broker_fee: Money::zero(currency.clone()),
                deductible_percentage: Percentage::ZERO,
                deductible: Money::zero(currency),
            },
            premium,
            coverage_amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carquote_common::CarAttributes;
    use rust_decimal_macros::dec;

    fn car() -> Car {
        Car::from_amount(dec!(10000), "USD", CarAttributes::new("Toyota", "Corolla", 2020)).unwrap()
    }

    #[test]
    fn test_request_builders() {
        let request = QuoteRequest::new(car())
            .with_base_rate(Percentage::new(dec!(0.01)).unwrap())
            .with_broker_fee(Money::new(dec!(25), "USD").unwrap());

        assert_eq!(request.base_rate, Some(Percentage::new(dec!(0.01)).unwrap()));
        assert_eq!(request.coverage, None);
        assert_eq!(request.deductible, None);
        assert_eq!(request.broker_fee.unwrap().amount(), dec!(25));
    }

    #[test]
    fn test_plain_quote_serialization() {
        let quote = InsuranceQuote::plain(
            Money::new(dec!(50.00), "USD").unwrap(),
            Money::new(dec!(8000.00), "USD").unwrap(),
            Percentage::new(dec!(0.005)).unwrap(),
            Percentage::new(dec!(0.8)).unwrap(),
        );

        assert_eq!(quote.breakdown.base_premium, quote.premium);
        assert!(quote.breakdown.broker_fee.is_zero());
        assert!(quote.breakdown.deductible.is_zero());

        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json["premium"]["currency"], "USD");
        assert_eq!(json["coverage_amount"]["amount"], "8000.00");
        assert_eq!(json["breakdown"]["deductible"]["currency"], "USD");
    }
}
