//! Nearest-centroid classifier: class `i` is the `i`-th centroid.

use serde::Deserialize;

use super::FEATURE_COUNT;
use crate::error::{IrisError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NearestCentroid {
    pub centroids: Vec<[f64; FEATURE_COUNT]>,
}

impl NearestCentroid {
    pub fn validate(&self) -> Result<()> {
        if self.centroids.is_empty() {
            return Err(IrisError::InvalidModel("no centroids".into()));
        }
        if self.centroids.iter().flatten().any(|v| !v.is_finite()) {
            return Err(IrisError::InvalidModel("non-finite centroid coordinate".into()));
        }
        Ok(())
    }

    /// Ties go to the lower index.
    pub fn predict(&self, features: &[f64; FEATURE_COUNT]) -> Result<i64> {
        let mut best: Option<(usize, f64)> = None;
        for (i, c) in self.centroids.iter().enumerate() {
            let d: f64 = c.iter().zip(features).map(|(a, b)| (a - b) * (a - b)).sum();
            if best.map_or(true, |(_, bd)| d < bd) {
                best = Some((i, d));
            }
        }
        let (idx, _) = best.ok_or_else(|| IrisError::InvalidModel("no centroids".into()))?;
        i64::try_from(idx).map_err(|e| IrisError::Internal(e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn picks_nearest() {
        let nc = NearestCentroid {
            centroids: vec![[5.0, 3.4, 1.5, 0.2], [5.9, 2.8, 4.3, 1.3], [6.6, 3.0, 5.6, 2.0]],
        };
        nc.validate().unwrap();
        assert_eq!(nc.predict(&[5.1, 3.5, 1.4, 0.2]).unwrap(), 0);
        assert_eq!(nc.predict(&[6.7, 3.1, 5.8, 2.1]).unwrap(), 2);
    }

    #[test]
    fn ties_go_to_lower_index() {
        let nc = NearestCentroid { centroids: vec![[1.0; 4], [-1.0; 4]] };
        assert_eq!(nc.predict(&[0.0; 4]).unwrap(), 0);
    }

    #[test]
    fn rejects_empty_and_non_finite() {
        assert!(NearestCentroid { centroids: vec![] }.validate().is_err());
        assert!(NearestCentroid { centroids: vec![[f64::NAN, 0.0, 0.0, 0.0]] }.validate().is_err());
    }
}
