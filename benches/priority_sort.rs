// benches/priority_sort.rs
use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use leadgen::config::consts::NOT_AVAILABLE;
use leadgen::lead::{classify, sort_leads, Lead};

/// Deterministic synthetic set: ratings sweep 0.0..5.0, every third lead has no website.
fn synthetic(n: usize) -> Vec<Lead> {
    let at = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
    (0..n)
        .map(|i| {
            let rating = ((i * 37) % 51) as f64 / 10.0;
            let website = if i % 3 == 0 { NOT_AVAILABLE.to_string() } else { format!("http://lead{i}.es") };
            Lead::new(
                format!("Lead {i}"), "Calle".into(), "925".into(),
                rating, website, "Clínicas".into(), at, "Toledo".into(),
            )
        })
        .collect()
}

fn bench_priority(c: &mut Criterion) {
    let leads = synthetic(10_000);

    c.bench_function("classify_10k", |b| {
        b.iter(|| {
            leads
                .iter()
                .filter(|l| classify(black_box(l.rating), black_box(&l.website)).rank() == 0)
                .count()
        })
    });

    c.bench_function("sort_10k", |b| {
        b.iter_batched(
            || leads.clone(),
            |mut v| {
                sort_leads(&mut v);
                black_box(v.len())
            },
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_priority);
criterion_main!(benches);
