//! Translation metrics and observability module.
//!
//! Counts how many key-path resolutions found a leaf and how many fell back
//! to echoing the key path. A climbing fallback count is the signal that a
//! page is asking for keys the locale files don't have.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Resolution counters shared by every language context of the process.
#[derive(Debug, Default)]
pub struct ResolutionMetrics {
    /// Number of key paths that resolved to a leaf string
    resolved: AtomicUsize,

    /// Number of key paths that fell back to the raw key
    fallbacks: AtomicUsize,
}

impl ResolutionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful resolution.
    pub fn record_resolved(&self) {
        self.resolved.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a resolution that returned the key path as fallback text.
    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn resolved(&self) -> usize {
        self.resolved.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let resolved = self.resolved();
        let fallbacks = self.fallbacks();
        let total = resolved + fallbacks;
        let fallback_rate = if total > 0 {
            (fallbacks as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            resolved,
            fallbacks,
            fallback_rate,
        }
    }
}

/// Metrics report containing current resolution statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Number of resolutions that found a leaf
    pub resolved: usize,

    /// Number of resolutions that fell back to the key path
    pub fallbacks: usize,

    /// Fallback rate as a percentage (0-100)
    pub fallback_rate: f64,
}
