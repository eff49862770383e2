use budget_chart::api::ChartEngine;
use budget_chart::core::{ChartKind, RawRecord, Viewport, compute_scale};
use budget_chart::render::NullRenderer;
use budget_chart::{ChartEngineConfig, ChartModel};
use chrono::{Days, NaiveDate};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const ENTITIES: [&str; 8] = [
    "Checking",
    "Savings",
    "Brokerage",
    "Credit",
    "Mortgage",
    "Retirement",
    "Emergency",
    "Travel",
];

fn generated_records(count: usize) -> Vec<RawRecord> {
    let base = NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid base date");
    (0..count)
        .map(|i| {
            let entity = ENTITIES[i % ENTITIES.len()];
            let date = base + Days::new((i / ENTITIES.len()) as u64);
            let value = 1_000.0 + (i as f64 * 0.37).sin() * 250.0;
            if i % 3 == 0 {
                RawRecord::new(entity, date.format("%Y-%m-%d").to_string(), format!("{value:.2}"))
            } else {
                RawRecord::new(entity, date.format("%Y-%m-%d").to_string(), value)
            }
        })
        .collect()
}

fn bench_compute_scale_10k(c: &mut Criterion) {
    let values: Vec<f64> = (0..10_000).map(|i| (i as f64 * 0.11).cos() * 5_000.0).collect();

    c.bench_function("compute_scale_10k", |b| {
        b.iter(|| compute_scale(black_box(values.iter().copied())))
    });
}

fn bench_prepare_model_10k(c: &mut Criterion) {
    let records = generated_records(10_000);
    let config = ChartEngineConfig::new(Viewport::new(1920, 1080));

    c.bench_function("prepare_model_10k", |b| {
        b.iter(|| ChartModel::from_records(black_box(&records), &config).expect("model"))
    });
}

fn bench_geometry_10k(c: &mut Criterion) {
    let records = generated_records(10_000);
    for kind in [ChartKind::Line, ChartKind::GroupedBar, ChartKind::StackedBar] {
        let config = ChartEngineConfig::new(Viewport::new(1920, 1080)).with_chart_kind(kind);
        let model = ChartModel::from_records(&records, &config).expect("model");

        c.bench_function(&format!("geometry_10k_{kind:?}"), |b| {
            b.iter(|| black_box(&model).geometry().expect("geometry"))
        });
    }
}

fn bench_refresh_and_tooltip_10k(c: &mut Criterion) {
    let records = generated_records(10_000);
    let config = ChartEngineConfig::new(Viewport::new(1920, 1080));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");

    c.bench_function("refresh_10k", |b| {
        b.iter(|| engine.refresh(black_box(&records)).expect("refresh"))
    });

    let model = engine.prepare(&records).expect("model");
    c.bench_function("tooltip_lookup", |b| {
        b.iter(|| model.resolve_tooltip(black_box(911.0)))
    });
}

criterion_group!(
    benches,
    bench_compute_scale_10k,
    bench_prepare_model_10k,
    bench_geometry_10k,
    bench_refresh_and_tooltip_10k
);
criterion_main!(benches);
