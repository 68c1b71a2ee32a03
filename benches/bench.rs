// Criterion benchmarks for PathMatch

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use path_match::catalog::CATALOG;
use path_match::core::{compute_score, distribution, rank, top_matches, Matcher};
use path_match::models::{
    CareerRecord, EducationLevel, InterestType, MajorCategory, MatchLimits, SkillSet, SkillTag,
    UserProfile,
};

fn create_profile() -> UserProfile {
    UserProfile::new(
        EducationLevel::Bachelor,
        MajorCategory::Stem,
        SkillSet::of(&[SkillTag::Programming, SkillTag::DataAnalysis]),
        InterestType::Technical,
    )
}

/// Catalog of arbitrary size made by cycling the built-in records
fn create_catalog(size: usize) -> Vec<CareerRecord> {
    CATALOG
        .iter()
        .cycle()
        .take(size)
        .enumerate()
        .map(|(i, record)| CareerRecord {
            id: i as u32 + 1,
            ..*record
        })
        .collect()
}

fn bench_compute_score(c: &mut Criterion) {
    let profile = create_profile();
    let record = &CATALOG[0];

    c.bench_function("compute_score", |b| {
        b.iter(|| compute_score(black_box(record), black_box(&profile)));
    });
}

fn bench_rank(c: &mut Criterion) {
    let profile = create_profile();

    let mut group = c.benchmark_group("rank");

    for size in [30, 300, 3000].iter() {
        let catalog = create_catalog(*size);

        group.bench_with_input(BenchmarkId::new("rank", size), size, |b, _| {
            b.iter(|| rank(black_box(&catalog), black_box(&profile)));
        });
    }

    group.finish();
}

fn bench_distribution(c: &mut Criterion) {
    let ranked = rank(&CATALOG, &create_profile());
    let window = top_matches(&ranked, 15);

    c.bench_function("industry_distribution_top_15", |b| {
        b.iter(|| distribution(black_box(window), |s| s.record.industry));
    });
}

fn bench_submit_profile(c: &mut Criterion) {
    let matcher = Matcher::new(MatchLimits::default());
    let profile = create_profile();

    c.bench_function("submit_profile", |b| {
        b.iter(|| matcher.submit_profile(black_box(&profile)));
    });
}

criterion_group!(
    benches,
    bench_compute_score,
    bench_rank,
    bench_distribution,
    bench_submit_profile
);

criterion_main!(benches);
