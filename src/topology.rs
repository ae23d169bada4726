//! Cache topology extraction from the report context
//!
//! Instruction-only caches are excluded: the sweep measures data access
//! latency, so only `Data` and `Unified` levels mark capacities the
//! working set can overflow.

use crate::report::CacheEntry;

/// One physical cache boundary, ready for annotation
#[derive(Debug, Clone, PartialEq)]
pub struct CacheLevelInfo {
    /// Capacity in kilobytes
    pub size_kb: f64,
    /// Human-readable label, e.g. `L1 Data cache`
    pub label: String,
}

/// True for cache kinds that hold data
fn is_data_bearing(kind: &str) -> bool {
    kind == "Data" || kind == "Unified"
}

/// Extract the data-bearing cache levels from the reported topology
///
/// Order is preserved as reported; levels sharing a size are all kept.
pub fn extract_cache_levels(caches: &[CacheEntry]) -> Vec<CacheLevelInfo> {
    let levels: Vec<CacheLevelInfo> = caches
        .iter()
        .filter(|cache| is_data_bearing(&cache.kind))
        .map(|cache| CacheLevelInfo {
            size_kb: cache.size / 1024.0,
            label: format!("L{} {} cache", cache.level, cache.kind),
        })
        .collect();

    tracing::debug!(count = levels.len(), "extracted data-bearing cache levels");

    levels
}
