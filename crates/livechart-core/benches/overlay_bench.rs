use criterion::{black_box, criterion_group, criterion_main, Criterion};
use livechart_core::overlay::{ClusterOverlay, TrendLineOverlay};
use livechart_core::Dataset;

fn bench_overlays(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlay_fit");
    for &n in &[20usize, 1_000, 10_000] {
        let data: Vec<f64> = (0..n).map(|i| (i as f64 * 0.37).cos() * 50.0 + i as f64).collect();
        group.bench_function(format!("trend_{n}"), |b| b.iter(|| black_box(TrendLineOverlay::fit(black_box(&data)))));
        group.bench_function(format!("clusters_{n}"), |b| b.iter(|| black_box(ClusterOverlay::labels(black_box(&data)))));
    }
    group.finish();
}

fn bench_stream_window(c: &mut Criterion) {
    c.bench_function("append_streaming_sample", |b| {
        let mut ds = Dataset::new();
        let mut v = 0.0;
        b.iter(|| {
            v += 1.0;
            ds.append_streaming_sample(black_box(v));
        });
    });
}

criterion_group!(benches, bench_overlays, bench_stream_window);
criterion_main!(benches);
