//! Axum router wiring.

use axum::{
    routing::{get, post},
    Router,
};

use crate::{api, app_state::AppState, ops, ui};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::home))
        .route("/predict", post(api::predict))
        .route("/ui", get(ui::ui))
        .route("/dashboard", get(ui::dashboard))
        .route("/stats", get(ops::stats))
        .route("/metrics", get(ops::metrics))
        .route("/health", get(ops::health))
        .with_state(state)
}
