//! Annotated chart composition
//!
//! Renders the measured latency curve on log2/log2 axes and overlays two
//! families of vertical markers: the machine's physical cache capacities
//! (red) and the detected latency-jump boundaries (blue). Both phenomena
//! are multiplicative, hence the log scaling on both axes.

use crate::boundary::BoundaryCandidate;
use crate::series::SizeLatencySeries;
use crate::topology::CacheLevelInfo;
use plotters::prelude::*;
use plotters::style::FontTransform;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while composing the chart
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("no data points to plot: the benchmark document produced an empty series")]
    EmptySeries,

    #[error("chart rendering failed: {0}")]
    Backend(String),
}

/// Result type for chart composition
pub type Result<T> = std::result::Result<T, ChartError>;

/// Output artifact parameters
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Where the rendered image is written
    pub output_path: PathBuf,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("results.png"),
            width: 1024,
            height: 768,
        }
    }
}

/// Compose and persist the annotated chart
///
/// Marker lists may be empty (the curve renders alone); an empty series is
/// a fatal input error. The write either fully succeeds or fails with an
/// error, there is no partial artifact to recover.
pub fn render_chart(
    config: &ChartConfig,
    series: &SizeLatencySeries,
    cache_levels: &[CacheLevelInfo],
    boundaries: &[BoundaryCandidate],
) -> Result<()> {
    if series.is_empty() {
        return Err(ChartError::EmptySeries);
    }

    draw(config, series, cache_levels, boundaries)
        .map_err(|e| ChartError::Backend(e.to_string()))
}

fn draw(
    config: &ChartConfig,
    series: &SizeLatencySeries,
    cache_levels: &[CacheLevelInfo],
    boundaries: &[BoundaryCandidate],
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let points = series.points();

    let min_size = points.iter().map(|p| p.size_kb).fold(f64::INFINITY, f64::min);
    let max_size = points
        .iter()
        .map(|p| p.size_kb)
        .fold(f64::NEG_INFINITY, f64::max);
    let min_latency = points
        .iter()
        .map(|p| p.latency_ns)
        .fold(f64::INFINITY, f64::min);
    let max_latency = points
        .iter()
        .map(|p| p.latency_ns)
        .fold(f64::NEG_INFINITY, f64::max);

    // Multiplicative padding keeps the log ranges positive and non-degenerate
    let x_range = (min_size * 0.8)..(max_size * 1.25);
    let y_range = (min_latency * 0.8)..(max_latency * 1.25);
    let y_top = max_latency * 1.25;

    let root =
        BitMapBackend::new(&config.output_path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Cache Performance Curve", ("sans-serif", 36))
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(
            x_range.log_scale().base(2.0),
            y_range.log_scale().base(2.0),
        )?;

    chart
        .configure_mesh()
        .x_desc("Working Set Size (KB, log scale)")
        .y_desc("Latency (ns per access, log scale)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            points.iter().map(|p| (p.size_kb, p.latency_ns)),
            BLACK.stroke_width(2),
        ))?
        .label("Measured latency")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK.stroke_width(2)));

    chart.draw_series(
        points
            .iter()
            .map(|p| Circle::new((p.size_kb, p.latency_ns), 3, BLACK.filled())),
    )?;

    // Physical cache capacities, labeled near the top and rotated for readability
    let cache_label_font = ("sans-serif", 13)
        .into_font()
        .transform(FontTransform::Rotate90)
        .color(&RED);
    for level in cache_levels {
        chart.draw_series(LineSeries::new(
            vec![(level.size_kb, min_latency * 0.8), (level.size_kb, y_top)],
            RED.stroke_width(1),
        ))?;
        chart.draw_series(std::iter::once(Text::new(
            level.label.clone(),
            (level.size_kb * 1.05, max_latency * 0.9),
            cache_label_font.clone(),
        )))?;
    }

    // Detected latency-jump boundaries, second color
    let boundary_label_font = ("sans-serif", 13)
        .into_font()
        .transform(FontTransform::Rotate90)
        .color(&BLUE);
    for candidate in boundaries {
        chart.draw_series(LineSeries::new(
            vec![
                (candidate.size_kb, min_latency * 0.8),
                (candidate.size_kb, y_top),
            ],
            BLUE.stroke_width(1),
        ))?;
        chart.draw_series(std::iter::once(Text::new(
            format!("~{} KB boundary", candidate.size_kb.round() as i64),
            (candidate.size_kb * 1.05, max_latency * 0.9),
            boundary_label_font.clone(),
        )))?;
    }

    chart.configure_series_labels().border_style(BLACK).draw()?;
    root.present()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::SamplePoint;
    use tempfile::TempDir;

    fn sweep() -> SizeLatencySeries {
        SizeLatencySeries::from_points(
            [
                (1.0, 1.1),
                (2.0, 1.1),
                (4.0, 1.2),
                (8.0, 1.2),
                (16.0, 1.3),
                (32.0, 2.4),
                (64.0, 2.5),
                (128.0, 2.6),
                (256.0, 2.7),
                (512.0, 6.0),
                (1024.0, 6.2),
            ]
            .iter()
            .map(|&(size_kb, latency_ns)| SamplePoint {
                size_kb,
                latency_ns,
            })
            .collect(),
        )
    }

    fn config_in(dir: &TempDir) -> ChartConfig {
        ChartConfig {
            output_path: dir.path().join("chart.png"),
            ..ChartConfig::default()
        }
    }

    #[test]
    fn test_empty_series_is_fatal() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        let result = render_chart(&config, &SizeLatencySeries::default(), &[], &[]);

        assert!(matches!(result, Err(ChartError::EmptySeries)));
        assert!(!config.output_path.exists());
    }

    #[test]
    fn test_curve_renders_without_markers() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        render_chart(&config, &sweep(), &[], &[]).unwrap();

        assert!(config.output_path.exists());
        assert!(config.output_path.metadata().unwrap().len() > 0);
    }

    #[test]
    fn test_full_annotation_renders() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        let levels = vec![
            CacheLevelInfo {
                size_kb: 32.0,
                label: "L1 Data cache".to_string(),
            },
            CacheLevelInfo {
                size_kb: 512.0,
                label: "L2 Unified cache".to_string(),
            },
        ];
        let boundaries = vec![
            BoundaryCandidate { size_kb: 32.0 },
            BoundaryCandidate { size_kb: 512.0 },
        ];

        render_chart(&config, &sweep(), &levels, &boundaries).unwrap();

        assert!(config.output_path.exists());
    }

    #[test]
    fn test_single_point_series_renders() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        let series = SizeLatencySeries::from_points(vec![SamplePoint {
            size_kb: 64.0,
            latency_ns: 2.0,
        }]);

        render_chart(&config, &series, &[], &[]).unwrap();

        assert!(config.output_path.exists());
    }

    #[test]
    fn test_unwritable_output_path_is_a_backend_error() {
        let config = ChartConfig {
            output_path: PathBuf::from("/nonexistent-dir/chart.png"),
            ..ChartConfig::default()
        };

        let result = render_chart(&config, &sweep(), &[], &[]);

        assert!(matches!(result, Err(ChartError::Backend(_))));
    }
}
