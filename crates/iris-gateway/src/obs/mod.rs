//! In-process prediction metrics.
//!
//! Counters and the recent-history window live behind one mutex in
//! `MetricsStore`; reporting renders from an owned `MetricsSnapshot`.

pub mod metrics;
pub mod ring;

pub use metrics::{MetricsSnapshot, MetricsStore, PredictionEvent};
pub use ring::RingBuffer;
