//! Model artifact format and the `Classifier` contract.
//!
//! Artifacts are JSON documents tagged by `kind`. Parsing is followed by a
//! structural validation pass so a loaded classifier can always produce an
//! answer; whether that answer is a known label is checked by the caller.

pub mod centroid;
pub mod tree;

use serde::Deserialize;

use crate::error::{IrisError, Result};

pub use centroid::NearestCentroid;
pub use tree::{DecisionTree, TreeNode};

/// Number of input features every classifier consumes.
pub const FEATURE_COUNT: usize = 4;

/// An already-trained predictor. Implementations are immutable after load.
pub trait Classifier: Send + Sync {
    /// Short identifier of the artifact family, used in logs.
    fn kind(&self) -> &'static str;
    /// Raw class ordinal for one feature vector.
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> Result<i64>;
}

/// Serialized model, one variant per supported family.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    DecisionTree(DecisionTree),
    NearestCentroid(NearestCentroid),
}

impl ModelArtifact {
    /// Parse and validate an artifact.
    pub fn from_json(s: &str) -> Result<Self> {
        let artifact: ModelArtifact = serde_json::from_str(s)
            .map_err(|e| IrisError::InvalidModel(format!("invalid json: {e}")))?;
        artifact.validate()?;
        Ok(artifact)
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            ModelArtifact::DecisionTree(t) => t.validate(),
            ModelArtifact::NearestCentroid(c) => c.validate(),
        }
    }
}

impl Classifier for ModelArtifact {
    fn kind(&self) -> &'static str {
        match self {
            ModelArtifact::DecisionTree(_) => "decision_tree",
            ModelArtifact::NearestCentroid(_) => "nearest_centroid",
        }
    }

    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> Result<i64> {
        match self {
            ModelArtifact::DecisionTree(t) => t.predict(features),
            ModelArtifact::NearestCentroid(c) => c.predict(features),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_on_kind() {
        let tree = ModelArtifact::from_json(
            r#"{"kind":"decision_tree","nodes":[{"type":"leaf","class":2}]}"#,
        )
        .unwrap();
        assert_eq!(tree.kind(), "decision_tree");
        assert_eq!(tree.predict(&[0.0; 4]).unwrap(), 2);

        let nc = ModelArtifact::from_json(
            r#"{"kind":"nearest_centroid","centroids":[[0,0,0,0],[9,9,9,9]]}"#,
        )
        .unwrap();
        assert_eq!(nc.kind(), "nearest_centroid");
        assert_eq!(nc.predict(&[8.0; 4]).unwrap(), 1);
    }

    #[test]
    fn unknown_kind_is_invalid_model() {
        let err = ModelArtifact::from_json(r#"{"kind":"svm","weights":[]}"#).unwrap_err();
        assert_eq!(err.client_code().as_str(), "INVALID_MODEL");
    }

    #[test]
    fn garbage_is_invalid_model() {
        let err = ModelArtifact::from_json("\u{80}not json").unwrap_err();
        assert!(matches!(err, IrisError::InvalidModel(_)));
    }
}
