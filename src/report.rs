//! Benchmark report loading
//!
//! Parses the JSON document emitted by a Google-Benchmark-style memory
//! latency harness: a `benchmarks` array of measurement records plus a
//! `context` block describing the host machine, including its cache
//! topology.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Complete benchmark results document
#[derive(Debug, Clone, Deserialize)]
pub struct BenchmarkReport {
    /// Measurement records in the order the harness emitted them
    pub benchmarks: Vec<BenchmarkRecord>,

    /// Host machine context (cache topology etc.)
    #[serde(default)]
    pub context: ReportContext,
}

/// A single reported measurement
#[derive(Debug, Clone, Deserialize)]
pub struct BenchmarkRecord {
    /// Benchmark identifier, a slash-delimited parameter path
    /// (e.g. `BM_CacheSize/4096/manual_time`)
    #[serde(default)]
    pub name: String,

    /// Per-access latency counter; absent when the harness did not
    /// report the measurement
    pub ns_per_access: Option<f64>,
}

/// Host machine context as reported by the harness
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportContext {
    /// Physical cache levels; may be absent in stripped output
    #[serde(default)]
    pub caches: Vec<CacheEntry>,
}

/// One physical cache as reported by the harness
#[derive(Debug, Clone, Deserialize)]
pub struct CacheEntry {
    /// Cache kind: `Data`, `Instruction` or `Unified`
    #[serde(rename = "type")]
    pub kind: String,

    /// Capacity in bytes
    pub size: f64,

    /// Cache level number (1 = closest to the core)
    pub level: u32,
}

impl BenchmarkReport {
    /// Load and parse a benchmark results document from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            bail!("Benchmark results file not found: {}", path_ref.display());
        }

        let contents =
            fs::read_to_string(path_ref).context("Failed to read benchmark results file")?;

        let report: BenchmarkReport =
            serde_json::from_str(&contents).context("Invalid benchmark results JSON")?;

        Ok(report)
    }
}
