use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use iris_core::error::{ClientCode, IrisError};

/// HTTP wrapper for `IrisError`.
#[derive(Debug)]
pub struct ApiError(pub IrisError);

impl From<IrisError> for ApiError {
    fn from(e: IrisError) -> Self {
        Self(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.client_code() {
            ClientCode::BadRequest | ClientCode::UnsupportedVersion => StatusCode::BAD_REQUEST,
            // `/predict` answers a missing model with a 200 payload, so this
            // code only surfaces if an adapter is queried without that check.
            ClientCode::ModelUnavailable
            | ClientCode::InvalidModel
            | ClientCode::InvalidClassIndex
            | ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": self.0.to_string(),
            "code": self.0.client_code().as_str(),
        });
        (self.status(), Json(body)).into_response()
    }
}
