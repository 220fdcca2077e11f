use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use iris_core::error::{IrisError, Result};
use iris_core::model::{Classifier, ModelArtifact};
use iris_core::FlowerMeasurement;

/// Classifier availability, checked before every inference.
#[derive(Clone)]
pub enum ModelAdapter {
    Loaded(Arc<dyn Classifier>),
    Unavailable(String),
}

impl ModelAdapter {
    /// Load the artifact at `path`. Failures are logged and produce
    /// `Unavailable` so the service keeps running in degraded mode.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match read_artifact(path) {
            Ok(artifact) => {
                tracing::info!(path = %path.display(), kind = artifact.kind(), "model loaded");
                ModelAdapter::Loaded(Arc::new(artifact))
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "model load failed");
                ModelAdapter::Unavailable(e.to_string())
            }
        }
    }

    pub fn from_classifier(c: Arc<dyn Classifier>) -> Self {
        ModelAdapter::Loaded(c)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, ModelAdapter::Loaded(_))
    }

    pub fn unavailable_reason(&self) -> Option<&str> {
        match self {
            ModelAdapter::Loaded(_) => None,
            ModelAdapter::Unavailable(reason) => Some(reason),
        }
    }

    /// Raw class ordinal for `m`.
    pub fn predict(&self, m: &FlowerMeasurement) -> Result<i64> {
        match self {
            ModelAdapter::Loaded(c) => c.predict(&m.features()),
            ModelAdapter::Unavailable(_) => Err(IrisError::ModelUnavailable),
        }
    }
}

impl fmt::Debug for ModelAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelAdapter::Loaded(c) => f.debug_tuple("Loaded").field(&c.kind()).finish(),
            ModelAdapter::Unavailable(r) => f.debug_tuple("Unavailable").field(r).finish(),
        }
    }
}

fn read_artifact(path: &Path) -> Result<ModelArtifact> {
    let s = fs::read_to_string(path)
        .map_err(|e| IrisError::InvalidModel(format!("read {} failed: {e}", path.display())))?;
    ModelArtifact::from_json(&s)
}
