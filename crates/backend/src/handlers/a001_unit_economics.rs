use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use contracts::domain::a001_unit_economics::dto::{
    BatchCalculationRequest, BatchCalculationResponse, CalculationResponse, CalculatorOptions,
};
use contracts::domain::a001_unit_economics::rates::RateCatalog;
use contracts::domain::a001_unit_economics::ListingInput;

use crate::domain::a001_unit_economics::service;
use crate::shared::error::AppError;
use crate::shared::state::AppState;

/// GET /api/unit-economics/options
pub async fn get_options() -> Json<CalculatorOptions> {
    Json(service::options().clone())
}

/// GET /api/unit-economics/defaults
pub async fn get_defaults() -> Json<ListingInput> {
    Json(service::defaults())
}

/// GET /api/unit-economics/rates
pub async fn get_rates() -> Json<RateCatalog> {
    Json(service::rates().clone())
}

/// POST /api/unit-economics/calculate
pub async fn calculate(
    payload: Result<Json<ListingInput>, JsonRejection>,
) -> Result<Json<CalculationResponse>, AppError> {
    let Json(input) = payload.map_err(|e| AppError::InvalidJson(e.body_text()))?;
    let response = service::calculate(input)?;
    Ok(Json(response))
}

/// POST /api/unit-economics/calculate/batch
pub async fn calculate_batch(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BatchCalculationRequest>, JsonRejection>,
) -> Result<Json<BatchCalculationResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::InvalidJson(e.body_text()))?;
    let response = service::calculate_batch(&request.items, state.calculator.max_batch_size)?;
    Ok(Json(response))
}
