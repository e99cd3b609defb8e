//! Nutrient calculator API routes

use crate::error::ApiResult;
use crate::services::NutritionService;
use crate::state::AppState;
use axum::{
    extract::rejection::JsonRejection,
    routing::{get, post},
    Json, Router,
};
use dog_health_shared::types::{CalculatorOptions, NutrientForm, NutritionReport};

/// Create nutrition routes
pub fn nutrition_routes() -> Router<AppState> {
    Router::new()
        .route("/calculate", post(calculate))
        .route("/options", get(options))
}

/// POST /api/v1/nutrition/calculate - Compute daily requirements from the form
async fn calculate(
    payload: Result<Json<NutrientForm>, JsonRejection>,
) -> ApiResult<Json<NutritionReport>> {
    let Json(form) = payload?;
    let report = NutritionService::calculate(&form)?;
    Ok(Json(report))
}

/// GET /api/v1/nutrition/options - Life stages and activity levels for the form
async fn options() -> Json<CalculatorOptions> {
    Json(NutritionService::options())
}
