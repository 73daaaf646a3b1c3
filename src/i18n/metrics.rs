//! Lookup metrics and observability module.
//!
//! Counts table builds, lookups, missing keys and failed interpolations so a
//! missing translation shows up as a number rather than only as a log line.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global lookup metrics singleton.
pub struct LookupMetrics {
    /// Number of tables built by the registry
    tables_built: AtomicUsize,

    /// Number of key lookups
    lookups: AtomicUsize,

    /// Number of lookups for a key the table does not have
    misses: AtomicUsize,

    /// Number of template interpolations rejected for argument mismatch
    format_failures: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<LookupMetrics> = OnceLock::new();

impl LookupMetrics {
    /// Get the global lookup metrics instance.
    pub fn global() -> &'static LookupMetrics {
        METRICS.get_or_init(LookupMetrics::new)
    }

    /// A standalone set of counters, all zero.
    pub fn new() -> Self {
        Self {
            tables_built: AtomicUsize::new(0),
            lookups: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
            format_failures: AtomicUsize::new(0),
        }
    }

    pub fn record_table_built(&self) {
        self.tables_built.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_lookup(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_format_failure(&self) {
        self.format_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn tables_built(&self) -> usize {
        self.tables_built.load(Ordering::Relaxed)
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn format_failures(&self) -> usize {
        self.format_failures.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let lookups = self.lookups();
        let misses = self.misses();
        let hit_rate = if lookups > 0 {
            (lookups.saturating_sub(misses) as f64 / lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            tables_built: self.tables_built(),
            lookups,
            misses,
            hit_rate,
            format_failures: self.format_failures(),
        }
    }
}

impl Default for LookupMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Metrics report containing current lookup statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Number of tables built
    pub tables_built: usize,

    /// Number of lookups
    pub lookups: usize,

    /// Number of missing-key lookups
    pub misses: usize,

    /// Share of lookups that found their key, as a percentage (0-100)
    pub hit_rate: f64,

    /// Number of rejected interpolations
    pub format_failures: usize,
}
