//! Latency-discontinuity detection over a size/latency sweep
//!
//! A working set overflowing a cache level shows up as a sharp multiplicative
//! jump between consecutive sweep points. The detector flags every adjacent
//! pair whose latency ratio exceeds a fixed threshold; the multiplicative
//! comparison is scale-invariant with respect to absolute latency. This is a
//! diagnostic pass, not a measurement-grade estimator: no smoothing, no
//! confidence intervals.

use crate::series::{SamplePoint, SizeLatencySeries};

/// Latency ratio between adjacent sizes treated as a cache boundary
/// (1.5 = a 50% increase)
pub const DEFAULT_THRESHOLD: f64 = 1.5;

/// A detected discontinuity: the working-set size at which the jump lands
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryCandidate {
    /// Size in kilobytes of the larger-side sample of the triggering pair
    pub size_kb: f64,
}

/// Scans an ascending-size latency series for boundary candidates
#[derive(Debug, Clone, Copy)]
pub struct BoundaryDetector {
    threshold: f64,
}

impl Default for BoundaryDetector {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl BoundaryDetector {
    /// Create a detector with an explicit ratio threshold
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// The configured ratio threshold
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Detect boundary candidates in the series
    ///
    /// The scan requires ascending size order. An unsorted series is sorted
    /// into a working copy first (with a warning); the caller's series is
    /// never reordered. Measured latencies are assumed strictly positive.
    pub fn detect(&self, series: &SizeLatencySeries) -> Vec<BoundaryCandidate> {
        if series.len() < 2 {
            return Vec::new();
        }

        if series.is_sorted_by_size() {
            self.scan(series.points())
        } else {
            tracing::warn!("series is not sorted by size; sorting a copy before detection");
            let mut sorted = series.points().to_vec();
            sorted.sort_by(|a, b| {
                a.size_kb
                    .partial_cmp(&b.size_kb)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            self.scan(&sorted)
        }
    }

    fn scan(&self, points: &[SamplePoint]) -> Vec<BoundaryCandidate> {
        points
            .windows(2)
            .filter(|pair| pair[1].latency_ns / pair[0].latency_ns > self.threshold)
            .map(|pair| BoundaryCandidate {
                size_kb: pair[1].size_kb,
            })
            .collect()
    }
}
