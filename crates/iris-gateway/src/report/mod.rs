//! Read-only renderers over a `MetricsSnapshot`.
//!
//! - `stats`      : `/stats` JSON
//! - `exposition` : `/metrics` Prometheus text
//! - `health`     : `/health` JSON

pub mod exposition;
pub mod health;
pub mod stats;

/// Every route the gateway serves, with a one-line description.
pub const ENDPOINTS: [(&str, &str); 7] = [
    ("/", "Service banner and model status"),
    ("/predict", "POST four measurements, get a species"),
    ("/ui", "Browser prediction form"),
    ("/dashboard", "Live statistics dashboard"),
    ("/stats", "Usage statistics (JSON)"),
    ("/metrics", "Prometheus metrics"),
    ("/health", "Health check"),
];

pub use exposition::render_metrics;
pub use health::HealthReport;
pub use stats::{performance_grade, StatsReport};
