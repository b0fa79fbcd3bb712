//! Criterion benchmarks for distviz_core rendering
//!
//! Run with: cargo bench -p distviz_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use distviz_core::catalog::{default_catalog, default_config};
use distviz_core::{
    ControlEvent, DistributionParams, Family, Interval, LineSeries, RenderMode, Visualizer,
    plot_distribution,
};

fn bench_plot_every_family(c: &mut Criterion) {
    let mut group = c.benchmark_group("plot_distribution");

    for config in default_catalog() {
        let params = DistributionParams::from_lookup(config.family, |name| {
            config.slider(name).map(|s| s.value)
        })
        .unwrap();

        for mode in RenderMode::ALL {
            group.bench_with_input(
                BenchmarkId::new(config.family.key(), mode.short_label()),
                &params,
                |b, params| {
                    b.iter(|| {
                        let mut target: Option<LineSeries> = None;
                        plot_distribution(
                            &mut target,
                            black_box(params),
                            config.interval,
                            mode,
                            100,
                        )
                        .unwrap();
                        target
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_grid_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_size");
    let params = DistributionParams::F {
        dfn: 5.0,
        dfd: 2.0,
        loc: 0.0,
        scale: 1.0,
    };
    let interval = Interval::new(0.0, 5.0).unwrap();

    for points in [100, 1_000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::new("points", points), points, |b, &points| {
            b.iter(|| {
                let mut target: Option<LineSeries> = None;
                plot_distribution(
                    &mut target,
                    black_box(&params),
                    interval,
                    RenderMode::Cumulative,
                    points,
                )
                .unwrap();
                target
            })
        });
    }

    group.finish();
}

fn bench_slider_burst(c: &mut Criterion) {
    let config = default_config(Family::Gamma);

    c.bench_function("burst_of_20_drags_then_release", |b| {
        b.iter(|| {
            let mut viz = Visualizer::for_distribution(&config, 100).unwrap();
            let mut target: Option<LineSeries> = None;
            for _ in 0..20 {
                viz.handle(ControlEvent::DragBy { slider: 0, steps: 1 }, &mut target)
                    .unwrap();
            }
            viz.handle(black_box(ControlEvent::ReleaseAll), &mut target)
                .unwrap();
            target
        })
    });
}

criterion_group!(
    benches,
    bench_plot_every_family,
    bench_grid_size,
    bench_slider_burst,
);
criterion_main!(benches);
