//! Iris species labels.
//!
//! The model answers with a raw ordinal; `Species::try_from` is the only way
//! to turn it into a label and rejects anything outside `0..=2`.

use serde::{Deserialize, Serialize};

use crate::error::{IrisError, Result};

/// One of the three fixed labels, in model ordinal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Setosa,
    Versicolor,
    Virginica,
}

impl Species {
    /// All labels in ordinal order.
    pub const ALL: [Species; 3] = [Species::Setosa, Species::Versicolor, Species::Virginica];

    pub fn as_str(self) -> &'static str {
        match self {
            Species::Setosa => "setosa",
            Species::Versicolor => "versicolor",
            Species::Virginica => "virginica",
        }
    }

    /// Ordinal index (`0..=2`).
    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<i64> for Species {
    type Error = IrisError;

    fn try_from(idx: i64) -> Result<Self> {
        match idx {
            0 => Ok(Species::Setosa),
            1 => Ok(Species::Versicolor),
            2 => Ok(Species::Virginica),
            other => Err(IrisError::InvalidClassIndex(other)),
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
