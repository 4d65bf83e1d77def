//! Criterion benchmarks for synoverlap.
//!
//! - Text analysis into words
//! - Synonym expansion of single tuples
//! - Sequential and parallel match counting

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use synoverlap::analysis::analyzer::Analyzer;
use synoverlap::analysis::analyzer::word::WordAnalyzer;
use synoverlap::analysis::synonym::{SynonymDictionary, TupleExpander};
use synoverlap::matching::{MatchConfig, MatchCounter};
use synoverlap::tuple::{Tuple, TupleSequence, TupleSize};

const WORDS: &[&str] = &[
    "the", "quick", "fast", "rapid", "brown", "fox", "vixen", "jumps", "leaps", "over", "lazy",
    "idle", "dog", "hound", "while", "a", "big", "large", "huge", "cat", "sleeps", "naps",
];

fn synonym_groups() -> Vec<Vec<&'static str>> {
    vec![
        vec!["quick", "fast", "rapid"],
        vec!["fox", "vixen"],
        vec!["jumps", "leaps"],
        vec!["lazy", "idle"],
        vec!["dog", "hound"],
        vec!["big", "large", "huge"],
        vec!["sleeps", "naps"],
    ]
}

/// Generate a pseudo-random document of `length` words.
fn generate_document(length: usize, seed: usize) -> String {
    (0..length)
        .map(|i| WORDS[(seed * 7 + i * 13) % WORDS.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

fn bench_text_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_analysis");

    let analyzer = WordAnalyzer::new();
    let text = generate_document(10_000, 1);

    group.throughput(Throughput::Elements(10_000));
    group.bench_function("words_10k", |b| {
        b.iter(|| {
            let words = analyzer.words(black_box(&text)).unwrap();
            black_box(words)
        })
    });

    group.finish();
}

fn bench_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("expansion");

    let dict = SynonymDictionary::from_synonym_groups(synonym_groups()).unwrap();
    let expander = TupleExpander::new(&dict);

    for size in [3usize, 6] {
        let tuple = Tuple::new(["quick", "fox", "jumps", "lazy", "dog", "big"].into_iter().take(size));
        group.bench_function(format!("tuple_{size}"), |b| {
            b.iter(|| {
                let count = expander.for_each_variant(black_box(&tuple), |v| {
                    black_box(v);
                });
                black_box(count)
            })
        });
    }

    group.finish();
}

fn bench_match_counting(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_counting");
    group.sample_size(20);

    let dict = Arc::new(SynonymDictionary::from_synonym_groups(synonym_groups()).unwrap());
    let analyzer = WordAnalyzer::new();
    let size = TupleSize::new(3).unwrap();
    let plagiarized = TupleSequence::from_words(
        &analyzer.words(&generate_document(5_000, 3)).unwrap(),
        size,
    );
    let source = TupleSequence::from_words(
        &analyzer.words(&generate_document(5_000, 5)).unwrap(),
        size,
    );

    group.throughput(Throughput::Elements(plagiarized.len() as u64));

    let sequential = MatchCounter::new(dict.clone());
    group.bench_function("sequential", |b| {
        b.iter(|| black_box(sequential.count_matches(&plagiarized, &source).unwrap()))
    });

    let parallel =
        MatchCounter::with_config(dict, &MatchConfig::new(3).with_parallel(true)).unwrap();
    group.bench_function("parallel", |b| {
        b.iter(|| black_box(parallel.count_matches(&plagiarized, &source).unwrap()))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_text_analysis,
    bench_expansion,
    bench_match_counting
);
criterion_main!(benches);
