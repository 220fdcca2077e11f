//! Operational HTTP endpoints.
//!
//! - `/health`  : model status + totals
//! - `/stats`   : usage statistics (JSON)
//! - `/metrics` : Prometheus text format

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::app_state::AppState;
use crate::report::{exposition, render_metrics, HealthReport, StatsReport};

pub async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    Json(HealthReport::new(&state.snapshot(), state.model()))
}

pub async fn stats(State(state): State<AppState>) -> Json<StatsReport> {
    Json(StatsReport::from_snapshot(&state.snapshot()))
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let body = render_metrics(&state.snapshot(), state.model_loaded());

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, exposition::CONTENT_TYPE)],
        body,
    )
        .into_response()
}
