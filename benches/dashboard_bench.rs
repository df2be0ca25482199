//! Benchmarks for view-model derivation and chart layout
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use olympics::chart::{
    layout_callouts, layout_pie, render_chart, ChartArea, ChartLayout, ChartOptions, SvgSurface,
};
use olympics::{derive_detail, derive_home, Country, Participation, StoreState};

fn create_test_countries(count: usize) -> Vec<Country> {
    (0..count)
        .map(|i| {
            (0..30).fold(Country::new(i as i64, format!("Country {}", i)), |country, j| {
                country.participation(Participation::new(
                    j,
                    1900 + (j as i32 * 4),
                    "Host City",
                    (i as u32 + j as u32) % 50,
                    100 + j as u32,
                ))
            })
        })
        .collect()
}

fn bench_derive(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive");

    for size in [5, 50, 200] {
        let state = StoreState::loaded(create_test_countries(size));

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("home_{}", size), |b| {
            b.iter(|| derive_home(black_box(&state)))
        });

        let last_id = (size - 1).to_string();
        group.bench_function(format!("detail_{}", size), |b| {
            b.iter(|| derive_detail(black_box(Some(last_id.as_str())), black_box(&state)))
        });
    }

    group.finish();
}

fn bench_chart(c: &mut Criterion) {
    let mut group = c.benchmark_group("chart");
    let area = ChartArea::of_size(800.0, 500.0);
    let options = ChartOptions::default();

    for size in [5, 50, 200] {
        let home = derive_home(&StoreState::loaded(create_test_countries(size))).unwrap();
        let values = home.values();
        let labels = home.labels();

        group.bench_function(format!("layout_{}", size), |b| {
            b.iter(|| {
                let slices = layout_pie(black_box(&values), &area, &options.pie);
                layout_callouts(&slices, black_box(&labels), &options.callouts)
            })
        });

        group.bench_function(format!("compute_{}", size), |b| {
            b.iter(|| ChartLayout::compute(black_box(&home), &area, &options))
        });

        group.bench_function(format!("render_svg_{}", size), |b| {
            b.iter(|| {
                let mut surface = SvgSurface::new(800.0, 500.0);
                render_chart(&mut surface, black_box(&home), &area, &options);
                surface.finish()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_derive, bench_chart);
criterion_main!(benches);
