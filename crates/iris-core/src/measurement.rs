//! Prediction request body.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Four flower measurements in centimeters. Integers and numeric strings
/// (`"5.1"`) coerce to floats on deserialize; no range checks are applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowerMeasurement {
    #[serde(deserialize_with = "lenient_f64")]
    pub sepal_length: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub sepal_width: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub petal_length: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub petal_width: f64,
}

/// Accepts a JSON number or a string holding a finite float.
fn lenient_f64<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    struct LenientF64;

    impl Visitor<'_> for LenientF64 {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number or a numeric string")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
            match v.trim().parse::<f64>() {
                Ok(x) if x.is_finite() => Ok(x),
                _ => Err(E::invalid_value(de::Unexpected::Str(v), &self)),
            }
        }
    }

    d.deserialize_any(LenientF64)
}

impl FlowerMeasurement {
    pub fn new(sepal_length: f64, sepal_width: f64, petal_length: f64, petal_width: f64) -> Self {
        Self { sepal_length, sepal_width, petal_length, petal_width }
    }

    /// Feature vector in model order: sepal length, sepal width, petal length, petal width.
    pub fn features(&self) -> [f64; 4] {
        [self.sepal_length, self.sepal_width, self.petal_length, self.petal_width]
    }
}
