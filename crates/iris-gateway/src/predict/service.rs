use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use serde::Serialize;

use iris_core::error::{IrisError, Result};
use iris_core::{FlowerMeasurement, Species};

use crate::model::ModelAdapter;
use crate::obs::{MetricsStore, PredictionEvent};

/// Fixed confidence tag reported with every prediction.
pub const CONFIDENCE: &str = "high";

/// `/predict` response body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PredictionResponse {
    Predicted {
        predicted_flower: Species,
        confidence: &'static str,
        /// Seconds.
        duration: f64,
    },
    /// Soft error: no model is loaded. Served with 200.
    Unavailable { error: String },
}

pub struct PredictionService {
    model: ModelAdapter,
    metrics: Arc<MetricsStore>,
}

impl PredictionService {
    pub fn new(model: ModelAdapter, metrics: Arc<MetricsStore>) -> Self {
        Self { model, metrics }
    }

    pub fn model(&self) -> &ModelAdapter {
        &self.model
    }

    /// Classify one measurement.
    ///
    /// With no model loaded this returns `PredictionResponse::Unavailable`
    /// and leaves every counter untouched. Otherwise the call counter is
    /// bumped before inference; a class index outside the label set fails
    /// with `InvalidClassIndex` and records nothing else.
    pub fn predict_flower(&self, m: &FlowerMeasurement) -> Result<PredictionResponse> {
        if !self.model.is_loaded() {
            return Ok(PredictionResponse::Unavailable {
                error: IrisError::ModelUnavailable.to_string(),
            });
        }

        let start = Instant::now();
        self.metrics.record_call();

        let raw = self.model.predict(m)?;
        let species = Species::try_from(raw)
            .inspect_err(|_| tracing::warn!(class_index = raw, "model returned unknown class"))?;
        let duration = start.elapsed().as_secs_f64();

        self.metrics.record_prediction(PredictionEvent {
            timestamp: Utc::now(),
            predicted_flower: species,
            duration,
            input: *m,
        });
        tracing::debug!(flower = %species, duration, "prediction served");

        Ok(PredictionResponse::Predicted {
            predicted_flower: species,
            confidence: CONFIDENCE,
            duration,
        })
    }
}
