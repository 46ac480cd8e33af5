//! Gateway configuration
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file. Everything is parsed and validated once at startup; a bad value stops
//! the service instead of being silently replaced.

use std::str::FromStr;

use carquote_common::{CurrencyCode, Percentage};
use carquote_underwriting::UnderwritingDefaults;
use rust_decimal::Decimal;
use thiserror::Error;

/// Default listen host
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listen port
pub const DEFAULT_PORT: u16 = 8000;

/// Default currency for car values (ISO 4217 code)
pub const DEFAULT_CURRENCY: &str = "USD";

/// Default base rate (0.5%)
pub const DEFAULT_BASE_RATE: &str = "0.005";

/// Default coverage share (100%)
pub const DEFAULT_COVERAGE_PERCENTAGE: &str = "1.0";

/// Configuration loading errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} has an unparseable value {value:?}")]
    Unparseable { var: &'static str, value: String },

    #[error("DEFAULT_CURRENCY must be a 3-letter ISO code, got {0:?}")]
    Currency(String),

    #[error("INSURANCE_BASE_RATE must be positive, got {0}")]
    BaseRate(Decimal),

    #[error("INSURANCE_COVERAGE_PERCENTAGE must be in (0, 1], got {0}")]
    Coverage(Decimal),
}

/// API gateway configuration
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Listen host
    pub host: String,
    /// Listen port
    pub port: u16,
    /// Defaults injected into every quote
    pub underwriting: UnderwritingDefaults,
}

impl GatewayConfig {
    /// Load configuration from `.env` and the process environment
    pub fn load() -> Result<Self, ConfigError> {
        // Try to load .env file
        let _ = dotenvy::dotenv();

        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("CARQUOTE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        // Platform PORT first, CARQUOTE_PORT wins when both are set
        let mut port = DEFAULT_PORT;
        for var in ["PORT", "CARQUOTE_PORT"] {
            if let Some(value) = lookup(var) {
                port = parse(var, &value)?;
            }
        }

        let currency = lookup("DEFAULT_CURRENCY").unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
        let currency = validate_currency(&currency)?;

        let base_rate: Decimal = parse(
            "INSURANCE_BASE_RATE",
            &lookup("INSURANCE_BASE_RATE").unwrap_or_else(|| DEFAULT_BASE_RATE.to_string()),
        )?;
        if base_rate <= Decimal::ZERO {
            return Err(ConfigError::BaseRate(base_rate));
        }

        let coverage: Decimal = parse(
            "INSURANCE_COVERAGE_PERCENTAGE",
            &lookup("INSURANCE_COVERAGE_PERCENTAGE")
                .unwrap_or_else(|| DEFAULT_COVERAGE_PERCENTAGE.to_string()),
        )?;
        if coverage <= Decimal::ZERO || coverage > Decimal::ONE {
            return Err(ConfigError::Coverage(coverage));
        }

        let base_rate = Percentage::new(base_rate).map_err(|_| ConfigError::BaseRate(base_rate))?;
        let coverage = Percentage::new(coverage).map_err(|_| ConfigError::Coverage(coverage))?;
        let underwriting = UnderwritingDefaults::new(currency, base_rate, coverage)
            .map_err(|_| ConfigError::Coverage(coverage.value()))?;

        Ok(Self {
            host,
            port,
            underwriting,
        })
    }

    /// `host:port` to bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse<T: FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Unparseable {
        var,
        value: value.to_string(),
    })
}

fn validate_currency(code: &str) -> Result<CurrencyCode, ConfigError> {
    CurrencyCode::new(code).map_err(|_| ConfigError::Currency(code.to_string()))
}
