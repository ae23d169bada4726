/// Boundary Detection Benchmarks
///
/// Measures the adjacent-pair ratio scan over sweeps of realistic and
/// adversarial sizes. These benchmarks help detect performance regressions
/// in the detection path.
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use umbral::boundary::BoundaryDetector;
use umbral::series::{SamplePoint, SizeLatencySeries};

/// A realistic power-of-two sweep: 1 KB to 256 MB with plateau/jump shape
fn realistic_sweep() -> SizeLatencySeries {
    let mut points = Vec::new();
    let mut latency_ns = 1.1;
    for exponent in 0..19 {
        let size_kb = f64::from(1u32 << exponent);
        // Jump at the typical L1/L2/L3 capacities
        if size_kb == 64.0 || size_kb == 2048.0 || size_kb == 32768.0 {
            latency_ns *= 2.2;
        } else {
            latency_ns *= 1.02;
        }
        points.push(SamplePoint {
            size_kb,
            latency_ns,
        });
    }
    SizeLatencySeries::from_points(points)
}

/// A dense synthetic sweep for throughput measurement
fn dense_sweep(len: usize) -> SizeLatencySeries {
    let points = (0..len)
        .map(|i| SamplePoint {
            size_kb: 1.0 + i as f64,
            latency_ns: 1.0 + (i % 7) as f64 * 0.1,
        })
        .collect();
    SizeLatencySeries::from_points(points)
}

fn bench_realistic_sweep(c: &mut Criterion) {
    let series = realistic_sweep();
    let detector = BoundaryDetector::default();

    c.bench_function("detect_realistic_sweep", |b| {
        b.iter(|| {
            let candidates = detector.detect(black_box(&series));
            black_box(candidates);
        });
    });
}

fn bench_dense_sweeps(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect_dense");
    let detector = BoundaryDetector::default();

    for len in [100usize, 1_000, 10_000] {
        let series = dense_sweep(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &series, |b, series| {
            b.iter(|| {
                let candidates = detector.detect(black_box(series));
                black_box(candidates);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_realistic_sweep, bench_dense_sweeps);
criterion_main!(benches);
