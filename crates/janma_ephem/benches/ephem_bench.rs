use criterion::{Criterion, black_box, criterion_group, criterion_main};
use janma_ephem::{
    AnalyticEphemeris, AyanamshaSystem, EphemConfig, Ephemeris, QueryTarget, Zodiac,
};

fn body_state_bench(c: &mut Criterion) {
    let engine = AnalyticEphemeris::new(EphemConfig::default()).unwrap();
    let jd = 2_451_544.770_833_3;
    let sidereal = Zodiac::Sidereal(AyanamshaSystem::Lahiri);

    let mut group = c.benchmark_group("body_state");
    group.bench_function("moon_sidereal", |b| {
        b.iter(|| engine.body_state(black_box(jd), QueryTarget::Moon, sidereal))
    });
    group.bench_function("saturn_sidereal", |b| {
        b.iter(|| engine.body_state(black_box(jd), QueryTarget::Saturn, sidereal))
    });
    group.bench_function("node_sidereal", |b| {
        b.iter(|| engine.body_state(black_box(jd), QueryTarget::Node, sidereal))
    });
    group.finish();
}

fn primitives_bench(c: &mut Criterion) {
    let engine = AnalyticEphemeris::new(EphemConfig::default()).unwrap();
    let jd = 2_451_544.770_833_3;

    let mut group = c.benchmark_group("primitives");
    group.bench_function("sidereal_time", |b| {
        b.iter(|| engine.sidereal_time_hours(black_box(jd)))
    });
    group.bench_function("ayanamsha", |b| {
        b.iter(|| engine.ayanamsha_deg(black_box(jd), AyanamshaSystem::Lahiri))
    });
    group.bench_function("true_obliquity", |b| {
        b.iter(|| engine.true_obliquity_deg(black_box(jd)))
    });
    group.finish();
}

criterion_group!(benches, body_state_bench, primitives_bench);
criterion_main!(benches);
