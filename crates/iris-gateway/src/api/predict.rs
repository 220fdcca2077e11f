use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use iris_core::FlowerMeasurement;

use super::ApiError;
use crate::app_state::AppState;
use crate::predict::PredictionResponse;

pub async fn home(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": "API working",
        "model_loaded": state.model_loaded(),
    }))
}

/// Malformed bodies never get here: the `Json` extractor rejects them.
pub async fn predict(
    State(state): State<AppState>,
    Json(m): Json<FlowerMeasurement>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let resp = state.predictor().predict_flower(&m)?;
    Ok(Json(resp))
}
