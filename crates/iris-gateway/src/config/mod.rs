//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use iris_core::error::{IrisError, Result};

pub use schema::{GatewayConfig, GatewaySection, MetricsSection, ModelSection};

/// Env var overriding the config path.
pub const CONFIG_ENV: &str = "IRIS_CONFIG";
/// Config path used when `IRIS_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "iris.yaml";

pub fn load_from_file(path: &str) -> Result<GatewayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| IrisError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| IrisError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Config path from `IRIS_CONFIG`, falling back to `iris.yaml`.
pub fn config_path() -> String {
    std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}

/// Load `path`, or the built-in defaults when no such file exists. A present
/// but invalid file is an error.
pub fn load_or_default(path: &str) -> Result<GatewayConfig> {
    if Path::new(path).exists() {
        load_from_file(path)
    } else {
        let cfg = GatewayConfig::default();
        cfg.validate()?;
        Ok(cfg)
    }
}
