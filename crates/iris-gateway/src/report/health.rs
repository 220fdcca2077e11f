use serde::Serialize;

use super::stats::SIMULATED_UPTIME;
use super::ENDPOINTS;
use crate::model::ModelAdapter;
use crate::obs::MetricsSnapshot;

/// `/health` body.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `healthy` with a model, `degraded` without.
    pub status: &'static str,
    pub model_loaded: bool,
    /// Why the model failed to load; absent when loaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_error: Option<String>,
    pub total_predictions: u64,
    pub api_version: &'static str,
    pub uptime: &'static str,
    pub system_status: &'static str,
    pub endpoints: Vec<&'static str>,
}

impl HealthReport {
    pub fn new(snap: &MetricsSnapshot, model: &ModelAdapter) -> Self {
        let model_loaded = model.is_loaded();
        Self {
            status: if model_loaded { "healthy" } else { "degraded" },
            model_loaded,
            model_error: model.unavailable_reason().map(str::to_string),
            total_predictions: snap.total_predictions(),
            api_version: env!("CARGO_PKG_VERSION"),
            uptime: SIMULATED_UPTIME,
            system_status: "operational",
            endpoints: ENDPOINTS.iter().map(|(path, _)| *path).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflects_model_state() {
        let snap = MetricsSnapshot {
            by_species: [1, 1, 1],
            api_calls: 3,
            latency_sum: 0.0,
            history: vec![],
            history_capacity: 50,
        };
        let tree = iris_core::ModelArtifact::from_json(
            r#"{"kind":"decision_tree","nodes":[{"type":"leaf","class":0}]}"#,
        )
        .unwrap();
        let up = HealthReport::new(&snap, &ModelAdapter::from_classifier(std::sync::Arc::new(tree)));
        assert_eq!(up.status, "healthy");
        assert_eq!(up.total_predictions, 3);
        assert!(up.model_error.is_none());
        assert!(up.endpoints.contains(&"/predict"));
        let v = serde_json::to_value(&up).unwrap();
        assert!(v.get("model_error").is_none());

        let down = HealthReport::new(&snap, &ModelAdapter::Unavailable("read failed".into()));
        assert_eq!(down.status, "degraded");
        assert!(!down.model_loaded);
        assert_eq!(down.model_error.as_deref(), Some("read failed"));
    }
}
