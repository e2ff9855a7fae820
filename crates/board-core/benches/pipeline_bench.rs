use std::sync::Arc;

use board_core::aggregate::{aggregate, by_brand};
use board_core::charts::LineChart;
use board_core::{transform, Field, Record, Reducer, RenderTarget, ViewState};
use criterion::{criterion_group, criterion_main, black_box, BatchSize, BenchmarkId, Criterion};

fn gen_records(n: usize, brands: usize) -> Vec<Record> {
    let start = chrono::NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    let mut price = 100.0f64;
    (0..n)
        .map(|i| {
            let o = price;
            let c = o + if i % 3 == 0 { -0.4 } else { 0.3 };
            price = c;
            Record {
                date: Some(start + chrono::Duration::days((i / brands) as i64)),
                brand_name: format!("brand{}", i % brands),
                industry_tag: format!("ind{}", i % 7),
                country: "USA".to_string(),
                open: o,
                high: o.max(c) + 1.0,
                low: o.min(c) - 1.0,
                close: c,
                volume: 1000.0 + (i % 13) as f64,
            }
        })
        .collect()
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate_rank");
    for &n in &[50_000usize, 100_000usize] {
        let data = gen_records(n, 200);
        group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}")), &data, |b, d| {
            b.iter(|| {
                let points = aggregate(d, by_brand, Reducer::Sum(Field::Volume));
                black_box(transform(&points, &ViewState::top(10)));
            });
        });
    }
    group.finish();
}

fn bench_line_mount(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_mount");
    for &n in &[20_000usize, 100_000usize] {
        let data: Arc<[Record]> = gen_records(n, 1).into();
        group.bench_function(BenchmarkId::from_parameter(format!("n{n}")), |b| {
            b.iter_batched(
                || Arc::clone(&data),
                |d| { let _ = black_box(RenderTarget::mount(Box::new(LineChart::default()), d)); },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_aggregate, bench_line_mount);
criterion_main!(benches);
