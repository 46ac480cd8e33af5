//! Money - Currency-tagged decimal amounts
//!
//! A [`Money`] value is an amount that is never negative plus a three-letter
//! currency code. Arithmetic never mutates; it returns a new value and fails
//! with [`QuoteError::CurrencyMismatch`] when two currencies meet.
//!
//! All rate and coverage applications go through [`Money::scale`], which
//! rounds half-up to two decimal places so every call site rounds the same way.

use std::cmp::Ordering;
use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::percentage::Percentage;
use crate::error::{QuoteError, Result};
use crate::{CURRENCY_CODE_LEN, MONEY_DECIMAL_PLACES};

/// Three-letter currency code, stored upper-case (e.g. `USD`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Validate and normalise a currency code
    pub fn new(code: impl AsRef<str>) -> Result<Self> {
        let raw = code.as_ref();
        let well_formed = raw.len() == CURRENCY_CODE_LEN
            && raw.chars().all(|c| c.is_ascii_alphabetic());

        if !well_formed {
            return Err(QuoteError::InvalidCurrency {
                code: raw.to_string(),
            });
        }

        Ok(Self(raw.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = QuoteError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<CurrencyCode> for String {
    fn from(value: CurrencyCode) -> Self {
        value.0
    }
}

/// Immutable monetary amount in a single currency
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "wire::MoneyRepr", into = "wire::MoneyRepr")]
pub struct Money {
    amount: Decimal,
    currency: CurrencyCode,
}

impl Money {
    /// Create a new amount, rejecting negatives and malformed currency codes
    pub fn new(amount: Decimal, currency: impl AsRef<str>) -> Result<Self> {
        if amount < Decimal::ZERO {
            return Err(QuoteError::InvalidAmount { amount });
        }

        Ok(Self {
            amount,
            currency: CurrencyCode::new(currency)?,
        })
    }

    /// Zero amount in the given currency
    pub fn zero(currency: CurrencyCode) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    #[inline]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    #[inline]
    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Sum two amounts of the same currency
    pub fn add(&self, other: &Money) -> Result<Money> {
        self.ensure_same_currency(other)?;

        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or(QuoteError::Overflow)?;

        Ok(Self {
            amount,
            currency: self.currency.clone(),
        })
    }

    /// Multiply by a percentage, rounding half-up to two decimal places
    pub fn scale(&self, percentage: &Percentage) -> Result<Money> {
        let product = self
            .amount
            .checked_mul(percentage.value())
            .ok_or(QuoteError::Overflow)?;

        Ok(Self {
            amount: round_to_cents(product),
            currency: self.currency.clone(),
        })
    }

    /// Order two amounts of the same currency
    pub fn compare(&self, other: &Money) -> Result<Ordering> {
        self.ensure_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    /// Currency-checked equality
    pub fn try_eq(&self, other: &Money) -> Result<bool> {
        Ok(self.compare(other)? == Ordering::Equal)
    }

    /// Currency-checked `<`
    pub fn try_lt(&self, other: &Money) -> Result<bool> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    fn ensure_same_currency(&self, other: &Money) -> Result<()> {
        if self.currency != other.currency {
            return Err(QuoteError::CurrencyMismatch {
                left: self.currency.to_string(),
                right: other.currency.to_string(),
            });
        }
        Ok(())
    }
}

fn round_to_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Insert `,` between every group of three integer digits
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fixed = format!("{:.2}", round_to_cents(self.amount));
        let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        write!(f, "{} {}.{}", self.currency, group_thousands(whole), cents)
    }
}

mod wire {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Serialize};

    use super::Money;
    use crate::error::{QuoteError, Result};

    /// Wire shape of [`Money`]; deserialisation funnels through [`Money::new`]
    #[derive(Debug, Serialize, Deserialize)]
    pub struct MoneyRepr {
        amount: Decimal,
        currency: String,
    }

    impl TryFrom<MoneyRepr> for Money {
        type Error = QuoteError;

        fn try_from(repr: MoneyRepr) -> Result<Self> {
            Money::new(repr.amount, repr.currency)
        }
    }

    impl From<Money> for MoneyRepr {
        fn from(money: Money) -> Self {
            Self {
                amount: money.amount,
                currency: money.currency.into(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn usd(amount: Decimal) -> Money {
        Money::new(amount, "USD").unwrap()
    }

    #[test]
    fn test_create_valid_money() {
        let money = usd(dec!(100.50));
        assert_eq!(money.amount(), dec!(100.50));
        assert_eq!(money.currency().as_str(), "USD");
    }

    #[test]
    fn test_negative_amount_rejected() {
        let result = Money::new(dec!(-100), "USD");
        assert_eq!(result, Err(QuoteError::InvalidAmount { amount: dec!(-100) }));
    }

    #[test]
    fn test_currency_validation() {
        assert!(matches!(
            Money::new(dec!(1), ""),
            Err(QuoteError::InvalidCurrency { .. })
        ));
        assert!(matches!(
            Money::new(dec!(1), "US"),
            Err(QuoteError::InvalidCurrency { .. })
        ));
        assert!(matches!(
            Money::new(dec!(1), "US1"),
            Err(QuoteError::InvalidCurrency { .. })
        ));
        assert_eq!(Money::new(dec!(1), "eur").unwrap().currency().as_str(), "EUR");
    }

    #[test]
    fn test_add_same_currency() {
        let total = usd(dec!(100.00)).add(&usd(dec!(50.25))).unwrap();
        assert_eq!(total.amount(), dec!(150.25));
        assert_eq!(total.currency().as_str(), "USD");
    }

    #[test]
    fn test_add_currency_mismatch() {
        let eur = Money::new(dec!(50.00), "EUR").unwrap();
        let result = usd(dec!(100.00)).add(&eur);
        assert_eq!(
            result,
            Err(QuoteError::CurrencyMismatch {
                left: "USD".to_string(),
                right: "EUR".to_string(),
            })
        );
    }

    #[test]
    fn test_scale_rounds_half_up() {
        let rate = Percentage::new(dec!(0.005)).unwrap();
        let premium = usd(dec!(3333.33)).scale(&rate).unwrap();
        // 3333.33 * 0.005 = 16.66665
        assert_eq!(premium.amount(), dec!(16.67));
    }

    #[test]
    fn test_add_overflow() {
        let result = usd(Decimal::MAX).add(&usd(dec!(1)));
        assert_eq!(result, Err(QuoteError::Overflow));
    }

    #[test]
    fn test_scale_overflow() {
        let double = Percentage::new(dec!(2)).unwrap();
        assert_eq!(usd(Decimal::MAX).scale(&double), Err(QuoteError::Overflow));

        let huge = Percentage::new(Decimal::MAX).unwrap();
        assert_eq!(usd(dec!(1000)).scale(&huge), Err(QuoteError::Overflow));
    }

    #[test]
    fn test_scale_keeps_currency() {
        let full = Percentage::new(dec!(1.0)).unwrap();
        let gbp = Money::new(dec!(12.34), "GBP").unwrap();
        assert_eq!(gbp.scale(&full).unwrap().currency().as_str(), "GBP");
    }

    #[test]
    fn test_compare() {
        let small = usd(dec!(10));
        let large = usd(dec!(20));
        assert_eq!(small.compare(&large).unwrap(), Ordering::Less);
        assert!(small.try_lt(&large).unwrap());
        assert!(usd(dec!(10.0)).try_eq(&usd(dec!(10.00))).unwrap());

        let eur = Money::new(dec!(10), "EUR").unwrap();
        assert!(matches!(
            small.compare(&eur),
            Err(QuoteError::CurrencyMismatch { .. })
        ));
        assert!(small.try_eq(&eur).is_err());
        assert!(small.try_lt(&eur).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(usd(dec!(1500.75)).to_string(), "USD 1,500.75");
        assert_eq!(usd(dec!(1000.5)).to_string(), "USD 1,000.50");
        assert_eq!(usd(dec!(999)).to_string(), "USD 999.00");
        assert_eq!(usd(dec!(1234567.891)).to_string(), "USD 1,234,567.89");
        assert_eq!(usd(dec!(0)).to_string(), "USD 0.00");
    }

    #[test]
    fn test_serde_validates() {
        let money: Money =
            serde_json::from_str(r#"{"amount":"10.50","currency":"usd"}"#).unwrap();
        assert_eq!(money, usd(dec!(10.50)));

        let negative = serde_json::from_str::<Money>(r#"{"amount":"-1","currency":"USD"}"#);
        assert!(negative.is_err());

        let json = serde_json::to_value(usd(dec!(10.50))).unwrap();
        assert_eq!(json["amount"], "10.50");
        assert_eq!(json["currency"], "USD");
    }

    fn cents() -> impl Strategy<Value = Decimal> {
        (0i64..1_000_000_000_000).prop_map(|c| Decimal::new(c, 2))
    }

    fn rate() -> impl Strategy<Value = Decimal> {
        (0i64..2_000_000).prop_map(|r| Decimal::new(r, 6))
    }

    proptest! {
        #[test]
        fn prop_scale_rounds_product(amount in cents(), value in rate()) {
            let scaled = usd(amount).scale(&Percentage::new(value).unwrap()).unwrap();
            let expected = (amount * value)
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            prop_assert_eq!(scaled.amount(), expected);
        }

        #[test]
        fn prop_add_associative(a in cents(), b in cents(), c in cents()) {
            let (a, b, c) = (usd(a), usd(b), usd(c));
            let left = a.add(&b).unwrap().add(&c).unwrap();
            let right = a.add(&b.add(&c).unwrap()).unwrap();
            prop_assert_eq!(left, right);
        }

        #[test]
        fn prop_add_commutative(a in cents(), b in cents()) {
            let (a, b) = (usd(a), usd(b));
            prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
        }

        #[test]
        fn prop_cross_currency_always_fails(a in cents(), b in cents()) {
            let dollars = usd(a);
            let euros = Money::new(b, "EUR").unwrap();
            let add_is_mismatch = matches!(dollars.add(&euros), Err(QuoteError::CurrencyMismatch { .. }));
            let cmp_is_mismatch = matches!(dollars.compare(&euros), Err(QuoteError::CurrencyMismatch { .. }));
            prop_assert!(add_is_mismatch);
            prop_assert!(cmp_is_mismatch);
        }

        #[test]
        fn prop_unit_percentage_never_grows(amount in cents(), value in 0i64..=10_000) {
            let pct = Percentage::new(Decimal::new(value, 4)).unwrap();
            let money = usd(amount);
            prop_assert!(pct.apply(&money).unwrap().amount() <= money.amount());
        }
    }
}
