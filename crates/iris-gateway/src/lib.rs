//! iris gateway library entry.
//!
//! This crate wires the model adapter, prediction service, metrics store,
//! and reporting renderers into an HTTP service. It is intended to be
//! consumed by the binary (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod model;
pub mod obs;
pub mod ops;
pub mod predict;
pub mod report;
pub mod router;
pub mod ui;
