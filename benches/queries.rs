/// Benchmarks for dataset queries.
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use energy_stats::dataset::Dataset;
use energy_stats::models::{CountryRecord, NumericField};
use energy_stats::queries::QueryEngine;

fn get_test_dataset(size: usize) -> Dataset {
    let records = (0..size)
        .map(|i| {
            let renewable = (i % 97) as f64;
            let non_renewable = (i % 89) as f64;
            CountryRecord::new(
                &format!("country-{}", i),
                &format!("region-{}", i % 8),
                renewable,
                non_renewable,
                renewable + non_renewable,
            )
        })
        .collect();
    Dataset::from_records(records)
}

fn criterion_benchmark(c: &mut Criterion) {
    for size in [200, 2_000, 20_000] {
        let engine = QueryEngine::new(get_test_dataset(size));
        let last = format!("country-{}", size - 1);
        c.bench_function(&format!("country_names({})", size), |b| {
            b.iter(|| engine.country_names())
        });
        c.bench_function(&format!("country_energy({})", size), |b| {
            b.iter(|| engine.country_energy(black_box(&last)).unwrap())
        });
        c.bench_function(&format!("field_values({})", size), |b| {
            b.iter(|| engine.field_values(black_box(NumericField::TotalEnergy)))
        });
        c.bench_function(&format!("regions({})", size), |b| b.iter(|| engine.regions()));
        c.bench_function(&format!("countries_in_region({})", size), |b| {
            b.iter(|| engine.countries_in_region(black_box("region-3")))
        });
        c.bench_function(&format!("averages({})", size), |b| {
            b.iter(|| engine.averages().unwrap())
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
