//! Criterion benchmarks for Relata.
//!
//! Covers the three hot paths:
//! - phrase analysis (tokenize, stop words, stemming)
//! - index construction from resolved triples
//! - retrieval and Jaccard scoring against a built index

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use relata::analysis::analyzer::PhraseAnalyzer;
use relata::graph::{DEFAULT_LIMIT, LabelTable, RawTriple, RelationFilter, Retriever, TripleIndex};

const WORDS: &[&str] = &[
    "dog", "animal", "oven", "kitchen", "running", "shoes", "apple", "tree", "fruit", "red",
    "house", "water", "cold", "hot", "piece", "cake", "bird", "flying", "music", "guitar",
    "river", "bank", "money", "paper", "school", "lesson", "garden", "flower", "winter",
    "snow", "city", "street",
];

const RELATIONS: &[&str] = &[
    "/r/IsA",
    "/r/AtLocation",
    "/r/UsedFor",
    "/r/PartOf",
    "/r/RelatedTo",
    "/r/HasA",
    "/r/Antonym",
];

/// Generate a label table of one- to three-word phrases.
fn generate_labels(count: usize) -> LabelTable {
    (0..count)
        .map(|i| {
            let length = 1 + i % 3;
            let label: Vec<&str> = (0..length)
                .map(|j| WORDS[(i * 7 + j * 13) % WORDS.len()]) // Pseudo-random distribution
                .collect();
            (format!("/c/en/n{i}"), label.join(" "))
        })
        .collect()
}

/// Generate raw triples between the generated nodes.
fn generate_triples(count: usize, nodes: usize) -> Vec<RawTriple> {
    (0..count)
        .map(|i| {
            RawTriple::new(
                format!("/c/en/n{}", (i * 31) % nodes),
                RELATIONS[i % RELATIONS.len()],
                format!("/c/en/n{}", (i * 17 + 5) % nodes),
            )
        })
        .collect()
}

fn bench_phrase_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("phrase_analysis");
    let analyzer = PhraseAnalyzer::new().unwrap();

    group.bench_function("stems_short_phrase", |b| {
        b.iter(|| black_box(analyzer.stems(black_box("The running shoes of the city"))))
    });

    group.bench_function("stems_with_originals", |b| {
        b.iter(|| {
            black_box(analyzer.stems_with_originals(black_box("flying birds over frozen rivers")))
        })
    });

    group.finish();
}

fn bench_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");
    group.sample_size(20);

    let analyzer = PhraseAnalyzer::new().unwrap();
    let labels = generate_labels(2_000);
    let triples = generate_triples(10_000, 2_000);

    group.throughput(Throughput::Elements(triples.len() as u64));
    group.bench_function("build_10k_triples", |b| {
        b.iter(|| {
            let index = TripleIndex::build(
                triples.iter().cloned(),
                &labels,
                RelationFilter::new(true),
                &analyzer,
            )
            .unwrap();
            black_box(index)
        })
    });

    group.finish();
}

fn bench_retrieval(c: &mut Criterion) {
    let mut group = c.benchmark_group("retrieval");

    let analyzer = Arc::new(PhraseAnalyzer::new().unwrap());
    let labels = generate_labels(2_000);
    let index = TripleIndex::build(
        generate_triples(10_000, 2_000),
        &labels,
        RelationFilter::default(),
        &analyzer,
    )
    .unwrap();
    let retriever = Retriever::new(&index, analyzer);

    group.bench_function("retrieve_single_words", |b| {
        b.iter(|| black_box(retriever.retrieve(black_box("dog"), black_box("animal"), DEFAULT_LIMIT)))
    });

    group.bench_function("retrieve_phrases", |b| {
        b.iter(|| {
            black_box(retriever.retrieve(
                black_box("red apple tree"),
                black_box("kitchen garden"),
                DEFAULT_LIMIT,
            ))
        })
    });

    group.bench_function("retrieve_no_match", |b| {
        b.iter(|| black_box(retriever.retrieve(black_box("zebra"), black_box("quartz"), DEFAULT_LIMIT)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_phrase_analysis,
    bench_index_build,
    bench_retrieval
);
criterion_main!(benches);
