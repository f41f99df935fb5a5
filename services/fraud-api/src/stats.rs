//! Process-wide analysis statistics

use crate::config::StatsConfig;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Running totals for `/stats` and `/health`
///
/// Owned by the application state and updated once per successful scoring
/// call. All counters are atomics, so handlers on any worker can record
/// without locking.
#[derive(Debug)]
pub struct StatsCounter {
    total_analyzed: AtomicU64,
    measured_calls: AtomicU64,
    measured_micros: AtomicU64,
    accuracy_rate: f64,
    baseline_processing_time_ms: f64,
    started_at: Instant,
}

impl StatsCounter {
    pub fn new(config: &StatsConfig) -> Self {
        StatsCounter {
            total_analyzed: AtomicU64::new(config.initial_total_analyzed),
            measured_calls: AtomicU64::new(0),
            measured_micros: AtomicU64::new(0),
            accuracy_rate: config.accuracy_rate,
            baseline_processing_time_ms: config.baseline_processing_time_ms,
            started_at: Instant::now(),
        }
    }

    /// Record one scored transaction
    pub fn record(&self, elapsed: Duration) {
        let micros = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
        self.total_analyzed.fetch_add(1, Ordering::Relaxed);
        self.measured_micros.fetch_add(micros, Ordering::Relaxed);
        self.measured_calls.fetch_add(1, Ordering::Relaxed);
    }

    pub fn total_analyzed(&self) -> u64 {
        self.total_analyzed.load(Ordering::Relaxed)
    }

    /// Mean processing time in milliseconds, or the configured baseline
    /// until something has been measured
    pub fn avg_processing_time_ms(&self) -> f64 {
        let calls = self.measured_calls.load(Ordering::Relaxed);
        if calls == 0 {
            return self.baseline_processing_time_ms;
        }
        let micros = self.measured_micros.load(Ordering::Relaxed);
        let avg_ms = micros as f64 / calls as f64 / 1000.0;
        (avg_ms * 10.0).round() / 10.0
    }

    pub fn accuracy_rate(&self) -> f64 {
        self.accuracy_rate
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}
