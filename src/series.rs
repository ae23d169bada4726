//! Record extraction: benchmark records to a size/latency series
//!
//! Each usable record encodes its working-set size in the second segment of
//! the slash-delimited benchmark name (`BM_CacheSize/<bytes>/<qualifier>`).
//! Records without the `ns_per_access` counter are skipped and reported
//! back to the caller; records whose name does not encode a size (setup,
//! teardown, summary rows) are skipped silently.

use crate::report::BenchmarkRecord;

/// One measured point of the sweep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    /// Working-set size in kilobytes
    pub size_kb: f64,
    /// Measured latency in nanoseconds per access
    pub latency_ns: f64,
}

/// Ordered size/latency series, kept in encounter order
///
/// The sweep is assumed to already be size-ordered; `is_sorted_by_size`
/// lets consumers that rely on ordering check the invariant instead of
/// trusting it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SizeLatencySeries {
    points: Vec<SamplePoint>,
}

impl SizeLatencySeries {
    /// Build a series from already-extracted points
    pub fn from_points(points: Vec<SamplePoint>) -> Self {
        Self { points }
    }

    /// Number of points in the series
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the series holds no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The points in encounter order
    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    /// True when sizes are non-decreasing in encounter order
    pub fn is_sorted_by_size(&self) -> bool {
        self.points.windows(2).all(|w| w[0].size_kb <= w[1].size_kb)
    }
}

/// Result of extracting a series from raw benchmark records
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Successfully parsed points, in encounter order
    pub series: SizeLatencySeries,
    /// Names of records that carried no `ns_per_access` counter
    pub skipped: Vec<String>,
}

/// Parse the working-set size (in bytes) out of a benchmark name
///
/// The name must have at least two slash-delimited segments and the second
/// segment must be a non-negative integer. Returns None for anything else.
pub fn parse_size_segment(name: &str) -> Option<u64> {
    let mut segments = name.split('/');
    segments.next()?;
    let size_segment = segments.next()?;
    if !size_segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    size_segment.parse::<u64>().ok()
}

/// Extract the size/latency series from raw benchmark records
///
/// Pure function of its input: no printing, no sorting, no deduplication.
/// Skipped-for-missing-counter names come back in `Extraction::skipped`
/// so the caller decides how to surface them.
pub fn extract_series(records: &[BenchmarkRecord]) -> Extraction {
    let mut points = Vec::new();
    let mut skipped = Vec::new();

    for record in records {
        let Some(latency_ns) = record.ns_per_access else {
            skipped.push(record.name.clone());
            continue;
        };

        // Setup/teardown and summary rows carry no size segment
        let Some(size_bytes) = parse_size_segment(&record.name) else {
            continue;
        };

        points.push(SamplePoint {
            size_kb: size_bytes as f64 / 1024.0,
            latency_ns,
        });
    }

    Extraction {
        series: SizeLatencySeries::from_points(points),
        skipped,
    }
}
