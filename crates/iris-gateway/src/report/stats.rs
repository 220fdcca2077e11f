use serde::Serialize;
use serde_json::{json, Map, Value};

use iris_core::Species;

use super::ENDPOINTS;
use crate::obs::{MetricsSnapshot, PredictionEvent};

/// Reported model accuracy. Static: the artifact carries no evaluation data.
pub const MODEL_ACCURACY: &str = "96.7%";
/// Reported availability. Static, not measured.
pub const SIMULATED_UPTIME: &str = "99.9%";

/// Letter grade for the mean prediction latency (seconds).
pub fn performance_grade(average_seconds: f64) -> &'static str {
    if average_seconds < 0.1 {
        "A+"
    } else if average_seconds < 0.5 {
        "A"
    } else {
        "B"
    }
}

#[derive(Debug, Serialize)]
pub struct FlowerBreakdown {
    pub setosa: u64,
    pub versicolor: u64,
    pub virginica: u64,
}

#[derive(Debug, Serialize)]
pub struct Statistics {
    pub total_predictions: u64,
    pub total_api_calls: u64,
    /// Seconds.
    pub average_prediction_time: f64,
    pub flower_breakdown: FlowerBreakdown,
    /// Label name, or `"None"` before the first prediction.
    pub most_popular_flower: String,
    pub model_accuracy: &'static str,
    pub uptime: &'static str,
    pub performance_grade: &'static str,
    pub recent_predictions: Vec<PredictionEvent>,
}

/// `/stats` body.
#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub statistics: Statistics,
    pub instructions: Value,
    pub endpoints: Value,
}

impl StatsReport {
    pub fn from_snapshot(snap: &MetricsSnapshot) -> Self {
        let average = snap.average_duration();
        let statistics = Statistics {
            total_predictions: snap.total_predictions(),
            total_api_calls: snap.api_calls,
            average_prediction_time: average,
            flower_breakdown: FlowerBreakdown {
                setosa: snap.count(Species::Setosa),
                versicolor: snap.count(Species::Versicolor),
                virginica: snap.count(Species::Virginica),
            },
            most_popular_flower: snap
                .most_predicted()
                .map_or_else(|| "None".to_string(), |s| s.to_string()),
            model_accuracy: MODEL_ACCURACY,
            uptime: SIMULATED_UPTIME,
            performance_grade: performance_grade(average),
            recent_predictions: snap.history.clone(),
        };

        let instructions = json!({
            "predict": "POST /predict with sepal_length, sepal_width, petal_length, petal_width (cm)",
            "ui": "Open /ui in a browser to use the prediction form",
            "dashboard": "Open /dashboard for live statistics (refreshes every 3 seconds)",
            "metrics": "Scrape /metrics with Prometheus",
            "health": "GET /health for service status",
        });

        let endpoints: Map<String, Value> = ENDPOINTS
            .iter()
            .map(|(path, desc)| ((*path).to_string(), Value::from(*desc)))
            .collect();

        Self { statistics, instructions, endpoints: Value::Object(endpoints) }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use iris_core::FlowerMeasurement;

    use super::*;

    fn snap(by_species: [u64; 3], latency_sum: f64) -> MetricsSnapshot {
        MetricsSnapshot {
            by_species,
            api_calls: by_species.iter().sum(),
            latency_sum,
            history: vec![],
            history_capacity: 50,
        }
    }

    #[test]
    fn grade_thresholds() {
        assert_eq!(performance_grade(0.0), "A+");
        assert_eq!(performance_grade(0.099), "A+");
        assert_eq!(performance_grade(0.1), "A");
        assert_eq!(performance_grade(0.499), "A");
        assert_eq!(performance_grade(0.5), "B");
    }

    #[test]
    fn empty_report() {
        let r = StatsReport::from_snapshot(&snap([0, 0, 0], 0.0));
        assert_eq!(r.statistics.total_predictions, 0);
        assert_eq!(r.statistics.average_prediction_time, 0.0);
        assert_eq!(r.statistics.most_popular_flower, "None");
        assert_eq!(r.statistics.performance_grade, "A+");
    }

    #[test]
    fn totals_and_breakdown() {
        let r = StatsReport::from_snapshot(&snap([2, 5, 1], 0.8));
        assert_eq!(r.statistics.total_predictions, 8);
        assert_eq!(r.statistics.flower_breakdown.versicolor, 5);
        assert_eq!(r.statistics.most_popular_flower, "versicolor");
        assert!((r.statistics.average_prediction_time - 0.1).abs() < 1e-12);
        assert_eq!(r.statistics.performance_grade, "A");
    }

    #[test]
    fn json_shape() {
        let mut s = snap([1, 0, 0], 0.001);
        s.history.push(PredictionEvent {
            timestamp: Utc::now(),
            predicted_flower: Species::Setosa,
            duration: 0.001,
            input: FlowerMeasurement::new(5.1, 3.5, 1.4, 0.2),
        });
        let v = serde_json::to_value(StatsReport::from_snapshot(&s)).unwrap();
        assert_eq!(v["statistics"]["flower_breakdown"]["setosa"], 1);
        assert_eq!(v["statistics"]["recent_predictions"][0]["predicted_flower"], "setosa");
        assert_eq!(v["statistics"]["recent_predictions"][0]["input"]["petal_width"], 0.2);
        assert!(v["instructions"]["predict"].is_string());
        assert!(v["endpoints"]["/metrics"].is_string());
    }
}
