//! iris core: transport-agnostic prediction primitives, error types, and the
//! model artifact format.
//!
//! This crate defines the label set, the request measurement, and the
//! `Classifier` contract shared by the gateway and offline tooling. It
//! intentionally carries no transport or runtime dependencies.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! A classifier answering with an unknown class index surfaces as
//! `IrisError::InvalidClassIndex` instead of an out-of-bounds fault.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod measurement;
pub mod model;
pub mod species;

/// Shared result type.
pub use error::{IrisError, Result};
pub use measurement::FlowerMeasurement;
pub use model::{Classifier, ModelArtifact};
pub use species::Species;
