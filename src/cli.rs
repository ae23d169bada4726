//! CLI argument parsing for Umbral

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "umbral")]
#[command(version)]
#[command(about = "Annotates memory-latency benchmark sweeps with cache boundaries", long_about = None)]
pub struct Cli {
    /// Benchmark results document to analyze
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        default_value = "results.json"
    )]
    pub input: PathBuf,

    /// Output image path for the composed chart
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        default_value = "results.png"
    )]
    pub output: PathBuf,

    /// Latency ratio between adjacent sweep sizes treated as a cache
    /// boundary (1.5 = a 50% increase)
    #[arg(long = "threshold", value_name = "RATIO", default_value = "1.5")]
    pub threshold: f64,

    /// Enable debug logging to stderr
    #[arg(long)]
    pub debug: bool,
}
