//! Step timing and structured logging for the simulation.

use crate::stats::FieldStats;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Step counter and named event counters.
pub struct Metrics {
    step_count: AtomicU64,
    animal_count: AtomicU64,
    slowest_step_us: AtomicU64,
    log_interval: u64,
    counters: Mutex<HashMap<String, AtomicU64>>,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new(100)
    }
}

impl std::fmt::Debug for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Metrics")
            .field("step_count", &self.step_count())
            .field("animal_count", &self.animal_count())
            .field("log_interval", &self.log_interval)
            .finish_non_exhaustive()
    }
}

impl Metrics {
    /// Creates a collector that logs a summary every `log_interval` steps.
    /// Zero turns the summary off.
    #[must_use]
    pub fn new(log_interval: u64) -> Self {
        Self {
            step_count: AtomicU64::new(0),
            animal_count: AtomicU64::new(0),
            slowest_step_us: AtomicU64::new(0),
            log_interval,
            counters: Mutex::new(HashMap::new()),
            start_time: Instant::now(),
        }
    }

    /// Records a completed step with its duration and the resulting counts.
    pub fn record_step(&self, duration: Duration, counts: &FieldStats) {
        self.step_count.fetch_add(1, Ordering::Relaxed);
        self.animal_count
            .store(counts.total() as u64, Ordering::Relaxed);
        let micros = u64::try_from(duration.as_micros()).unwrap_or(u64::MAX);
        self.slowest_step_us.fetch_max(micros, Ordering::Relaxed);

        let step = self.step_count.load(Ordering::Relaxed);
        if self.log_interval > 0 && step.is_multiple_of(self.log_interval) {
            tracing::info!(
                step = step,
                animals = counts.total(),
                duration_us = micros,
                counts = %counts,
                "Simulation step"
            );
        }
    }

    /// Increments a named counter.
    pub fn increment_counter(&self, name: &str) {
        let mut counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters
            .entry(name.to_string())
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(1, Ordering::Relaxed);
    }

    #[must_use]
    pub fn counter(&self, name: &str) -> u64 {
        let counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters
            .get(name)
            .map_or(0, |count| count.load(Ordering::Relaxed))
    }

    #[must_use]
    pub fn step_count(&self) -> u64 {
        self.step_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn animal_count(&self) -> u64 {
        self.animal_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn slowest_step(&self) -> Duration {
        Duration::from_micros(self.slowest_step_us.load(Ordering::Relaxed))
    }

    /// Gets elapsed time since metrics creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn reset(&self) {
        self.step_count.store(0, Ordering::Relaxed);
        self.animal_count.store(0, Ordering::Relaxed);
        self.slowest_step_us.store(0, Ordering::Relaxed);
        self.counters
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}

/// Installs a global fmt subscriber writing to stderr.
///
/// `level` is used unless `RUST_LOG` is set. Calling it more than once is a
/// no-op.
pub fn init_logging(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = Metrics::new(10);
        assert_eq!(metrics.step_count(), 0);
        assert_eq!(metrics.slowest_step(), Duration::ZERO);
    }

    #[test]
    fn test_record_step() {
        let metrics = Metrics::new(1);
        metrics.record_step(Duration::from_millis(3), &FieldStats::default());
        metrics.record_step(Duration::from_millis(1), &FieldStats::default());
        assert_eq!(metrics.step_count(), 2);
        assert_eq!(metrics.animal_count(), 0);
        assert_eq!(metrics.slowest_step(), Duration::from_millis(3));
    }

    #[test]
    fn test_counters_and_reset() {
        let metrics = Metrics::default();
        metrics.increment_counter("extinctions");
        metrics.increment_counter("extinctions");
        assert_eq!(metrics.counter("extinctions"), 2);
        assert_eq!(metrics.counter("missing"), 0);

        metrics.reset();
        assert_eq!(metrics.counter("extinctions"), 0);
    }
}
