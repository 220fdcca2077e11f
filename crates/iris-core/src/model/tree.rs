//! Binary decision tree stored as a flat node array.

use serde::Deserialize;

use super::FEATURE_COUNT;
use crate::error::{IrisError, Result};

/// A single tree node. Node 0 is the root.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum TreeNode {
    /// Go `left` when `features[feature] <= threshold`, else `right`.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        class: i64,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    /// Structural checks. Children must point forward, so every walk
    /// terminates within `nodes.len()` steps.
    pub fn validate(&self) -> Result<()> {
        if self.nodes.is_empty() {
            return Err(IrisError::InvalidModel("decision tree has no nodes".into()));
        }
        for (i, node) in self.nodes.iter().enumerate() {
            if let TreeNode::Split { feature, threshold, left, right } = *node {
                if feature >= FEATURE_COUNT {
                    return Err(IrisError::InvalidModel(format!(
                        "node {i}: feature {feature} out of range"
                    )));
                }
                if !threshold.is_finite() {
                    return Err(IrisError::InvalidModel(format!("node {i}: non-finite threshold")));
                }
                for child in [left, right] {
                    if child <= i || child >= self.nodes.len() {
                        return Err(IrisError::InvalidModel(format!(
                            "node {i}: child {child} must be in {}..{}",
                            i + 1,
                            self.nodes.len()
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    pub fn predict(&self, features: &[f64; FEATURE_COUNT]) -> Result<i64> {
        let mut idx = 0;
        loop {
            match self.nodes.get(idx) {
                Some(TreeNode::Leaf { class }) => return Ok(*class),
                Some(TreeNode::Split { feature, threshold, left, right }) => {
                    let x = features
                        .get(*feature)
                        .ok_or_else(|| IrisError::Internal(format!("feature {feature} out of range")))?;
                    idx = if *x <= *threshold { *left } else { *right };
                }
                None => return Err(IrisError::Internal(format!("tree node {idx} missing"))),
            }
        }
    }
}
