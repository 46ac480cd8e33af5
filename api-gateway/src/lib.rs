//! # CarQuote API Gateway
//!
//! REST front end for the underwriting engine.
//!
//! ## Endpoints
//!
//! - `GET  /health`: liveness probe
//! - `GET  /api/v1/version`: build version and configured defaults
//! - `POST /api/v1/insurance/calculate`: premium and coverage quote

pub mod config;
pub mod error;
pub mod routes;
pub mod schemas;

pub use config::{ConfigError, GatewayConfig};
pub use error::ApiError;
pub use routes::{router, AppState};

/// Gateway version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
