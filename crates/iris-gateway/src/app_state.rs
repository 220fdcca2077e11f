//! Shared application state for the iris gateway.
//!
//! The model adapter and metrics store are built once at startup and shared
//! by every handler through `Arc`s; nothing here is a process global.

use std::sync::Arc;

use iris_core::error::Result;

use crate::config::GatewayConfig;
use crate::model::ModelAdapter;
use crate::obs::{MetricsSnapshot, MetricsStore};
use crate::predict::PredictionService;

#[derive(Clone)]
pub struct AppState {
    cfg: Arc<GatewayConfig>,
    metrics: Arc<MetricsStore>,
    predictor: Arc<PredictionService>,
}

impl AppState {
    /// Build application state, loading the model from `cfg.model.path`.
    /// A model that fails to load leaves the state in degraded mode.
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        let model = ModelAdapter::load(&cfg.model.path);
        Self::with_model(cfg, model)
    }

    /// Build application state around an already-resolved model.
    pub fn with_model(cfg: GatewayConfig, model: ModelAdapter) -> Result<Self> {
        let metrics = Arc::new(MetricsStore::new(cfg.metrics.history_capacity)?);
        let predictor = Arc::new(PredictionService::new(model, Arc::clone(&metrics)));

        Ok(Self {
            cfg: Arc::new(cfg),
            metrics,
            predictor,
        })
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.cfg
    }

    pub fn predictor(&self) -> &PredictionService {
        &self.predictor
    }

    pub fn model(&self) -> &ModelAdapter {
        self.predictor.model()
    }

    pub fn model_loaded(&self) -> bool {
        self.predictor.model().is_loaded()
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}
