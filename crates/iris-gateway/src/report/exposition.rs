//! Prometheus text exposition for the prediction counters.
//!
//! Fixed template: every metric is preceded by `# HELP` and `# TYPE` lines.
//! Float samples use six decimals.

use std::fmt::Write;

use iris_core::Species;

use crate::obs::MetricsSnapshot;

pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

fn header(out: &mut String, name: &str, kind: &str, help: &str) {
    let _ = writeln!(out, "# HELP {name} {help}");
    let _ = writeln!(out, "# TYPE {name} {kind}");
}

pub fn render_metrics(snap: &MetricsSnapshot, model_loaded: bool) -> String {
    let mut out = String::new();

    header(&mut out, "iris_predictions_total", "counter", "Predictions per flower species");
    for s in Species::ALL {
        let _ = writeln!(out, "iris_predictions_total{{flower=\"{}\"}} {}", s, snap.count(s));
    }

    header(&mut out, "iris_predictions_all_total", "counter", "Predictions across all species");
    let _ = writeln!(out, "iris_predictions_all_total {}", snap.total_predictions());

    header(&mut out, "api_calls_total", "counter", "Prediction calls against a loaded model");
    let _ = writeln!(out, "api_calls_total {}", snap.api_calls);

    header(&mut out, "prediction_duration_seconds_sum", "counter", "Cumulative prediction time in seconds");
    let _ = writeln!(out, "prediction_duration_seconds_sum {:.6}", snap.latency_sum);

    header(&mut out, "prediction_duration_seconds_avg", "gauge", "Average prediction time in seconds");
    let _ = writeln!(out, "prediction_duration_seconds_avg {:.6}", snap.average_duration());

    header(&mut out, "iris_model_loaded", "gauge", "Whether a model is loaded (1=yes, 0=no)");
    let _ = writeln!(out, "iris_model_loaded {}", u8::from(model_loaded));

    header(&mut out, "iris_history_size", "gauge", "Entries in the recent prediction window");
    let _ = writeln!(out, "iris_history_size {}", snap.history.len());

    header(&mut out, "iris_history_capacity", "gauge", "Maximum entries kept in the recent prediction window");
    let _ = writeln!(out, "iris_history_capacity {}", snap.history_capacity);

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap() -> MetricsSnapshot {
        MetricsSnapshot {
            by_species: [3, 1, 0],
            api_calls: 5,
            latency_sum: 0.004,
            history: vec![],
            history_capacity: 50,
        }
    }

    #[test]
    fn renders_counters() {
        let text = render_metrics(&snap(), true);
        assert!(text.contains("iris_predictions_total{flower=\"setosa\"} 3\n"));
        assert!(text.contains("iris_predictions_total{flower=\"versicolor\"} 1\n"));
        assert!(text.contains("iris_predictions_total{flower=\"virginica\"} 0\n"));
        assert!(text.contains("iris_predictions_all_total 4\n"));
        assert!(text.contains("api_calls_total 5\n"));
        assert!(text.contains("prediction_duration_seconds_avg 0.001000\n"));
        assert!(text.contains("prediction_duration_seconds_sum 0.004000\n"));
        assert!(text.contains("iris_model_loaded 1\n"));
        assert!(text.contains("iris_history_size 0\n"));
        assert!(text.contains("iris_history_capacity 50\n"));
    }

    #[test]
    fn every_metric_has_help_and_type() {
        let text = render_metrics(&snap(), false);
        let samples: Vec<&str> = text
            .lines()
            .filter(|l| !l.starts_with('#'))
            .map(|l| l.split(['{', ' ']).next().unwrap_or_default())
            .collect();
        for name in samples {
            assert!(text.contains(&format!("# HELP {name} ")), "{name}");
            assert!(text.contains(&format!("# TYPE {name} ")), "{name}");
        }
        assert!(text.contains("iris_model_loaded 0\n"));
    }
}
