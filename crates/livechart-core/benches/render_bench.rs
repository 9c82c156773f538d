use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use livechart_core::{render, Chart, ChartKind, RenderOptions};

fn samples(n: usize) -> Vec<f64> {
    (0..n).map(|i| (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001)).collect()
}

fn bench_render(c: &mut Criterion) {
    let data = samples(2_000);
    let mut opts = RenderOptions::default();
    opts.width = 800;
    opts.height = 500;
    opts.draw_labels = false;

    let mut group = c.benchmark_group("render_png_bytes");
    for kind in ChartKind::ALL {
        group.bench_function(kind.name(), |b| {
            let mut chart = Chart::new();
            b.iter(|| -> Result<()> {
                render(&mut chart, black_box(&data), kind, None)?;
                let bytes = chart.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
