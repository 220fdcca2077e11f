//! JSON API endpoints.
//!
//! - `GET /`         : banner + model status
//! - `POST /predict` : classify one measurement

pub mod error;
pub mod predict;

pub use error::ApiError;
pub use predict::{home, predict};
