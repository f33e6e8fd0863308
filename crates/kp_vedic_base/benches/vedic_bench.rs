use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kp_time::CivilDate;
use kp_vedic_base::{
    AyanamshaMode, DashaConfig, TimeFinderConfig, ayanamsha, build_horary_table,
    find_time_for_ascendant, full_dasha_report, horary_entry, lordship, placidus_cusps,
};

fn lordship_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("lordship");
    group.bench_function("lordship", |b| b.iter(|| lordship(black_box(123.456))));
    group.bench_function("ayanamsa_new", |b| {
        b.iter(|| ayanamsha(black_box(2_460_000.5), AyanamshaMode::New, None))
    });
    group.finish();
}

fn horary_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("horary");
    group.bench_function("build_table", |b| b.iter(build_horary_table));
    group.bench_function("entry_lookup", |b| b.iter(|| horary_entry(black_box(137))));

    let date = CivilDate {
        year: 2024,
        month: 3,
        day: 15,
    };
    let cfg = TimeFinderConfig::default();
    group.bench_function("find_time_for_ascendant", |b| {
        b.iter(|| {
            find_time_for_ascendant(black_box(211.5), date, 6.9271, 79.8612, 5.5, &cfg)
        })
    });
    group.finish();
}

fn chart_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("chart");
    group.bench_function("placidus_cusps", |b| {
        b.iter(|| placidus_cusps(black_box(2_460_000.5), 6.9271, 79.8612))
    });
    let cfg = DashaConfig::default();
    group.bench_function("full_dasha_report", |b| {
        b.iter(|| full_dasha_report(black_box(77.7), 2_451_545.0, 2_460_000.5, &cfg))
    });
    group.finish();
}

criterion_group!(benches, lordship_bench, horary_bench, chart_bench);
criterion_main!(benches);
