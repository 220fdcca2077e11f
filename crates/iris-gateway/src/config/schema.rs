use std::net::SocketAddr;

use serde::Deserialize;
use iris_core::error::{IrisError, Result};

/// Largest accepted history window.
pub const MAX_HISTORY_CAPACITY: usize = 10_000;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub model: ModelSection,

    #[serde(default)]
    pub metrics: MetricsSection,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            gateway: GatewaySection::default(),
            model: ModelSection::default(),
            metrics: MetricsSection::default(),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(IrisError::UnsupportedVersion);
        }

        self.gateway.validate()?;
        self.model.validate()?;
        self.metrics.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Fallback filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            log_level: default_log_level(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if self.log_level.trim().is_empty() {
            return Err(IrisError::BadRequest("gateway.log_level must not be empty".into()));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            IrisError::BadRequest(format!("gateway.listen must be a valid SocketAddr: {e}"))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8000".into()
}
fn default_log_level() -> String {
    "info".into()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelSection {
    #[serde(default = "default_model_path")]
    pub path: String,
}

impl Default for ModelSection {
    fn default() -> Self {
        Self { path: default_model_path() }
    }
}

impl ModelSection {
    pub fn validate(&self) -> Result<()> {
        if self.path.trim().is_empty() {
            return Err(IrisError::BadRequest("model.path must not be empty".into()));
        }
        Ok(())
    }
}

fn default_model_path() -> String {
    "iris_model.json".into()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricsSection {
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
}

impl Default for MetricsSection {
    fn default() -> Self {
        Self { history_capacity: default_history_capacity() }
    }
}

impl MetricsSection {
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_HISTORY_CAPACITY).contains(&self.history_capacity) {
            return Err(IrisError::BadRequest(format!(
                "metrics.history_capacity must be between 1 and {MAX_HISTORY_CAPACITY}"
            )));
        }
        Ok(())
    }
}

fn default_history_capacity() -> usize {
    50
}
