use criterion::{black_box, criterion_group, criterion_main, Criterion};

use headway::pricing::{
    fixtures, AccountProvider, ComparisonSelection, EntitlementResolver, FeatureMatrix,
};

fn bench_classify(c: &mut Criterion) {
    let resolver = EntitlementResolver::new(fixtures::standard_catalog());
    let directory = fixtures::sample_directory();
    let account = directory.find_by_name("Innovate Labs").unwrap();

    c.bench_function("classify_scenario", |b| {
        b.iter(|| resolver.classify_scenario(black_box(account)))
    });
}

fn bench_resolve_view(c: &mut Criterion) {
    let resolver = EntitlementResolver::new(fixtures::standard_catalog());
    let directory = fixtures::sample_directory();
    let account = directory.find_by_name("Innovate Labs").unwrap();

    c.bench_function("resolve_account_view", |b| {
        b.iter(|| resolver.resolve_account_view(black_box(account)).unwrap())
    });
}

fn bench_project_grid(c: &mut Criterion) {
    let catalog = fixtures::standard_catalog();
    let selection = ComparisonSelection::new(
        &catalog,
        ["Business Free", "Business Mini", "Business Max", "Advisor Premium"],
    )
    .unwrap();

    c.bench_function("project_grid", |b| {
        b.iter(|| FeatureMatrix::project(black_box(&catalog), black_box(&selection)).unwrap())
    });
}

criterion_group!(benches, bench_classify, bench_resolve_view, bench_project_grid);
criterion_main!(benches);
