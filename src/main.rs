use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use umbral::boundary::BoundaryDetector;
use umbral::cli::Cli;
use umbral::report::BenchmarkReport;
use umbral::topology::{self, CacheLevelInfo};
use umbral::{chart, series};

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Print the extracted cache levels for operator visibility
fn print_cache_levels(levels: &[CacheLevelInfo]) {
    let formatted: Vec<String> = levels
        .iter()
        .map(|level| format!("({} KB, {})", level.size_kb, level.label))
        .collect();
    println!("Cache lines: [{}]", formatted.join(", "));
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Validate threshold: a ratio at or below 1.0 flags every sample
    if args.threshold.is_nan() || args.threshold <= 1.0 {
        anyhow::bail!(
            "Invalid value for --threshold: {} (must be greater than 1.0)",
            args.threshold
        );
    }

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let report = BenchmarkReport::from_file(&args.input)?;

    let extraction = series::extract_series(&report.benchmarks);
    for name in &extraction.skipped {
        println!("Benchmark {name} has no ns_per_access counter, ignoring");
    }
    tracing::debug!(
        points = extraction.series.len(),
        skipped = extraction.skipped.len(),
        "extracted size/latency series"
    );

    let cache_levels = topology::extract_cache_levels(&report.context.caches);
    print_cache_levels(&cache_levels);

    let detector = BoundaryDetector::new(args.threshold);
    let boundaries = detector.detect(&extraction.series);
    tracing::debug!(candidates = boundaries.len(), "boundary detection complete");

    let config = chart::ChartConfig {
        output_path: args.output.clone(),
        ..chart::ChartConfig::default()
    };
    chart::render_chart(&config, &extraction.series, &cache_levels, &boundaries)?;

    println!("Plot saved: {}", args.output.display());
    Ok(())
}
