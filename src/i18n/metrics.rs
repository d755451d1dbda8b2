//! Lookup metrics for a translation store.
//!
//! Counts how often lookups are served by the requested locale, fall back
//! to the base locale, or fail outright.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
pub struct LookupMetrics {
    /// Lookups answered by the requested locale
    hits: AtomicUsize,

    /// Lookups answered by the base locale after a per-key miss
    fallbacks: AtomicUsize,

    /// Lookups that found nothing, even in the base locale
    misses: AtomicUsize,
}

impl LookupMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn report(&self) -> MetricsReport {
        let hits = self.hits();
        let fallbacks = self.fallbacks();
        let misses = self.misses();
        let lookups = hits + fallbacks + misses;
        let fallback_rate = if lookups > 0 {
            (fallbacks as f64 / lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups,
            hits,
            fallbacks,
            misses,
            fallback_rate,
        }
    }
}

/// Snapshot of lookup statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub lookups: usize,
    pub hits: usize,
    pub fallbacks: usize,
    pub misses: usize,

    /// Share of lookups served by the base locale, as a percentage (0-100)
    pub fallback_rate: f64,
}
