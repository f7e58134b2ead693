//! Benchmarks for crop matching and ranking.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use croplog_match::{jaro_winkler_similarity, rank, tokenize};

fn create_vocabulary(count: usize) -> Vec<String> {
    const STEMS: [&str; 8] = [
        "cucumber", "cabbage", "carrot", "squash", "kale", "beet", "pepper", "tomato",
    ];
    (0..count)
        .map(|i| format!("{} {}, each", STEMS[i % STEMS.len()], i / STEMS.len()))
        .collect()
}

fn bench_similarity(c: &mut Criterion) {
    c.bench_function("jaro_winkler_single", |b| {
        b.iter(|| jaro_winkler_similarity(black_box("cucumber"), black_box("cucumbers")))
    });
}

fn bench_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize_multi_alias", |b| {
        b.iter(|| tokenize(black_box("squash, jack be little, each")))
    });
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");

    for size in [10, 100, 1000].iter() {
        let vocabulary = create_vocabulary(*size);

        group.bench_with_input(BenchmarkId::new("vocabulary", size), size, |b, _| {
            b.iter(|| rank(black_box(&vocabulary), black_box("cucum"), black_box(5)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_similarity, bench_tokenize, bench_rank);
criterion_main!(benches);
