use criterion::{Criterion, black_box, criterion_group, criterion_main};
use janma_chart::{
    BirthDetails, ChartOptions, GeoPosition, compute_chart, compute_lagna, graha_positions,
};
use janma_ephem::{AnalyticEphemeris, AyanamshaSystem, EphemConfig};

fn chart_bench(c: &mut Criterion) {
    let engine = AnalyticEphemeris::new(EphemConfig::default()).unwrap();
    let details = BirthDetails::new(2000, 1, 1, 12, 0, 5.5);
    let geo = GeoPosition::new(28.6, 77.2).unwrap();
    let options = ChartOptions::default();
    let moment = details.birth_moment().unwrap();

    let mut group = c.benchmark_group("chart");
    group.bench_function("full_chart", |b| {
        b.iter(|| compute_chart(&engine, black_box(&details), &geo, &options))
    });
    group.bench_function("graha_positions", |b| {
        b.iter(|| graha_positions(&engine, black_box(moment), AyanamshaSystem::Lahiri))
    });
    group.bench_function("lagna", |b| {
        b.iter(|| compute_lagna(&engine, black_box(moment), &geo, AyanamshaSystem::Lahiri))
    });
    group.finish();
}

criterion_group!(benches, chart_bench);
criterion_main!(benches);
