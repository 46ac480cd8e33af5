//! # CarQuote Common
//!
//! Value types and errors shared by the CarQuote underwriting workspace.
//!
//! ## Core Types
//!
//! - [`Money`]: non-negative decimal amount tied to a [`CurrencyCode`]
//! - [`Percentage`]: non-negative ratio where `1.0` is 100%
//! - [`Car`]: insured vehicle with a strictly positive value
//!
//! All types are immutable; every operation returns a new value or a
//! [`QuoteError`].

pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{QuoteError, Result};
pub use types::{
    car::{Car, CarAttributes},
    money::{CurrencyCode, Money},
    percentage::Percentage,
};

/// CarQuote version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Decimal places kept by every scaled monetary amount
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Length of an ISO-style currency code
pub const CURRENCY_CODE_LEN: usize = 3;
