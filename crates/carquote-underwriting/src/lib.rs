//! # Underwriting
//!
//! Premium and coverage calculation for CarQuote.
//!
//! ## Quote Formula
//!
//! ```text
//! Premium  = BaseRate × CarValue (+ BrokerFee)
//! Coverage = CoveragePercentage × CarValue
//! ```
//!
//! Where:
//! - BaseRate: any non-negative ratio (0.005 = 0.5%)
//! - CoveragePercentage: a ratio in [0, 1]
//! - BrokerFee: optional flat fee in the car's currency
//!
//! Every multiplication goes through `Money::scale`, so all amounts are
//! rounded half-up to cents.

pub mod calculator;
pub mod defaults;
pub mod quote;

pub use calculator::InsuranceCalculator;
pub use defaults::UnderwritingDefaults;
pub use quote::{InsuranceQuote, QuoteBreakdown, QuoteRequest};
