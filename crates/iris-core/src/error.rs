//! Shared error type across iris crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed configuration.
    BadRequest,
    /// Model artifact could not be parsed or failed validation.
    InvalidModel,
    /// No model is loaded.
    ModelUnavailable,
    /// Model answered with a class outside the label set.
    InvalidClassIndex,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::InvalidModel => "INVALID_MODEL",
            ClientCode::ModelUnavailable => "MODEL_UNAVAILABLE",
            ClientCode::InvalidClassIndex => "INVALID_CLASS_INDEX",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, IrisError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum IrisError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("invalid model: {0}")]
    InvalidModel(String),
    #[error("Model not loaded")]
    ModelUnavailable,
    #[error("model returned class index {0} outside the label set")]
    InvalidClassIndex(i64),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl IrisError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            IrisError::BadRequest(_) => ClientCode::BadRequest,
            IrisError::InvalidModel(_) => ClientCode::InvalidModel,
            IrisError::ModelUnavailable => ClientCode::ModelUnavailable,
            IrisError::InvalidClassIndex(_) => ClientCode::InvalidClassIndex,
            IrisError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            IrisError::Internal(_) => ClientCode::Internal,
        }
    }
}
