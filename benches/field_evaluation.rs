use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use coax_field::prelude::*;

fn bench_field_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("coaxial_field");
    let constants = PhysicalConstants::default();
    let geometry = GeometryParameters::default();

    for density in [4.0e-3, 2.0e-3, 1.0e-3] {
        let cloud = build_sample_grid(&geometry, density).expect("valid reference geometry");
        group.bench_function(BenchmarkId::new("evaluate_field", cloud.len()), |b| {
            b.iter(|| evaluate_field(cloud.points(), &constants, &geometry))
        });
    }

    group.bench_function("build_sample_grid/2mm", |b| b.iter(|| build_sample_grid(&geometry, 2.0e-3)));
    group.finish();
}

criterion_group!(benches, bench_field_evaluation);
criterion_main!(benches);
