//! Prediction service: model adapter + label mapping + metrics bookkeeping.

pub mod service;

pub use service::{PredictionResponse, PredictionService, CONFIDENCE};
