//! HTTP routes

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::Method,
    response::Json,
    routing::{get, post},
    Router,
};
use carquote_underwriting::{InsuranceCalculator, UnderwritingDefaults};
use chrono::{Datelike, Utc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::schemas::{InsuranceRequest, InsuranceResponse};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub calculator: InsuranceCalculator,
    pub defaults: Arc<UnderwritingDefaults>,
}

impl AppState {
    pub fn new(defaults: UnderwritingDefaults) -> Self {
        Self {
            calculator: InsuranceCalculator::new(),
            defaults: Arc::new(defaults),
        }
    }
}

/// Build the gateway router
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        // Health & Version
        .route("/health", get(health_check))
        .route("/api/v1/version", get(version))
        // Insurance
        .route("/api/v1/insurance/calculate", post(calculate_insurance))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "version": crate::VERSION,
    }))
}

async fn version(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "version": crate::VERSION,
        "default_currency": state.defaults.currency.as_str(),
        "base_rate": state.defaults.base_rate.to_string(),
        "coverage_percentage": state.defaults.coverage.to_string(),
    }))
}

#[instrument(skip_all)]
async fn calculate_insurance(
    State(state): State<AppState>,
    payload: Result<Json<InsuranceRequest>, JsonRejection>,
) -> Result<Json<InsuranceResponse>, ApiError> {
    let Json(payload) = payload?;
    let current_year = Utc::now().year();
    payload.validate(current_year)?;

    let request = payload.into_quote_request(&state.defaults)?;
    let quote = state.calculator.quote(&request, &state.defaults)?;

    info!(
        car = %request.car,
        premium = %quote.premium,
        coverage = %quote.coverage_amount,
        "Quote issued"
    );

    Ok(Json(InsuranceResponse::from_quote(
        &request.car,
        &quote,
        current_year,
    )))
}
