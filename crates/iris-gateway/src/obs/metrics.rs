//! Prediction metrics store.
//!
//! All counters and the history window sit behind a single `Mutex`, so each
//! request's updates land together and readers never see a half-applied
//! prediction. A poisoned lock is recovered: the counters are plain numbers
//! and remain consistent even if a holder panicked.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use serde::Serialize;

use iris_core::error::Result;
use iris_core::{FlowerMeasurement, Species};

use super::ring::RingBuffer;

/// One successful prediction, as kept in the history window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionEvent {
    pub timestamp: DateTime<Utc>,
    pub predicted_flower: Species,
    /// Seconds.
    pub duration: f64,
    pub input: FlowerMeasurement,
}

struct Inner {
    by_species: [u64; 3],
    api_calls: u64,
    /// Seconds.
    latency_sum: f64,
    history: RingBuffer<PredictionEvent>,
}

pub struct MetricsStore {
    inner: Mutex<Inner>,
}

impl MetricsStore {
    pub fn new(history_capacity: usize) -> Result<Self> {
        Ok(Self {
            inner: Mutex::new(Inner {
                by_species: [0; 3],
                api_calls: 0,
                latency_sum: 0.0,
                history: RingBuffer::with_capacity(history_capacity)?,
            }),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Count a prediction call against a loaded model, before inference runs.
    pub fn record_call(&self) {
        self.lock().api_calls += 1;
    }

    /// Apply a completed prediction: label counter, latency sum, history.
    pub fn record_prediction(&self, event: PredictionEvent) {
        let mut g = self.lock();
        g.by_species[event.predicted_flower.index()] += 1;
        g.latency_sum += event.duration;
        g.history.push(event);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let g = self.lock();
        MetricsSnapshot {
            by_species: g.by_species,
            api_calls: g.api_calls,
            latency_sum: g.latency_sum,
            history: g.history.iter().cloned().collect(),
            history_capacity: g.history.capacity(),
        }
    }
}

/// Point-in-time copy of the store.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSnapshot {
    pub by_species: [u64; 3],
    pub api_calls: u64,
    pub latency_sum: f64,
    /// Oldest -> newest.
    pub history: Vec<PredictionEvent>,
    pub history_capacity: usize,
}

impl MetricsSnapshot {
    pub fn count(&self, species: Species) -> u64 {
        self.by_species[species.index()]
    }

    /// Sum of per-label counts.
    pub fn total_predictions(&self) -> u64 {
        self.by_species.iter().sum()
    }

    /// Mean latency in seconds; zero before the first prediction.
    pub fn average_duration(&self) -> f64 {
        self.latency_sum / self.total_predictions().max(1) as f64
    }

    /// Label with the highest count, first in ordinal order on ties.
    /// `None` before the first prediction.
    pub fn most_predicted(&self) -> Option<Species> {
        if self.total_predictions() == 0 {
            return None;
        }
        let mut best = Species::Setosa;
        for s in Species::ALL {
            if self.count(s) > self.count(best) {
                best = s;
            }
        }
        Some(best)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn event(s: Species, duration: f64) -> PredictionEvent {
        PredictionEvent {
            timestamp: Utc::now(),
            predicted_flower: s,
            duration,
            input: FlowerMeasurement::new(5.1, 3.5, 1.4, 0.2),
        }
    }

    #[test]
    fn fresh_store_is_zeroed() {
        let m = MetricsStore::new(50).unwrap();
        let s = m.snapshot();
        assert_eq!(s.by_species, [0, 0, 0]);
        assert_eq!(s.api_calls, 0);
        assert_eq!(s.average_duration(), 0.0);
        assert_eq!(s.most_predicted(), None);
        assert!(s.history.is_empty());
    }

    #[test]
    fn prediction_touches_only_its_label() {
        let m = MetricsStore::new(50).unwrap();
        m.record_call();
        m.record_prediction(event(Species::Versicolor, 0.002));
        let s = m.snapshot();
        assert_eq!(s.by_species, [0, 1, 0]);
        assert_eq!(s.api_calls, 1);
        assert_eq!(s.total_predictions(), 1);
        assert!((s.average_duration() - 0.002).abs() < 1e-12);
    }

    #[test]
    fn ties_pick_first_label() {
        let m = MetricsStore::new(50).unwrap();
        m.record_prediction(event(Species::Virginica, 0.0));
        m.record_prediction(event(Species::Versicolor, 0.0));
        assert_eq!(m.snapshot().most_predicted(), Some(Species::Versicolor));
        m.record_prediction(event(Species::Virginica, 0.0));
        assert_eq!(m.snapshot().most_predicted(), Some(Species::Virginica));
    }

    #[test]
    fn history_is_bounded() {
        let m = MetricsStore::new(50).unwrap();
        for i in 0..51 {
            m.record_prediction(event(Species::Setosa, i as f64));
        }
        let s = m.snapshot();
        assert_eq!(s.history.len(), 50);
        assert_eq!(s.history[0].duration, 1.0);
        assert_eq!(s.history[49].duration, 50.0);
        assert_eq!(s.total_predictions(), 51);
    }

    #[test]
    fn concurrent_updates_are_not_lost() {
        let m = Arc::new(MetricsStore::new(50).unwrap());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let m = Arc::clone(&m);
                std::thread::spawn(move || {
                    let s = Species::ALL[t % 3];
                    for _ in 0..1_000 {
                        m.record_call();
                        m.record_prediction(event(s, 0.0));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        let s = m.snapshot();
        assert_eq!(s.api_calls, 8_000);
        assert_eq!(s.total_predictions(), 8_000);
        assert_eq!(s.history.len(), 50);
    }
}
