//! Feature benchmarks for the other case types and headline scoring.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use title_fix::{CaseType, Options, headline_score, process, transform};

#[path = "common.rs"]
pub mod common;
use self::common::{batch_text, create_bench_group, headline_text, standard_criterion_config};

/// Benchmark every case type on a single headline
fn bench_case_types(c: &mut Criterion) {
    let mut group = create_bench_group(c, "features/case_types");
    let text = headline_text();

    for case_type in CaseType::ALL {
        let options = Options::default().with_case_type(case_type);
        group.bench_function(case_type.as_str(), |b| {
            b.iter(|| black_box(process(black_box(&text), &options)));
        });
    }

    group.finish();
}

/// Benchmark sentence case over a long text
fn bench_sentence_case(c: &mut Criterion) {
    let mut group = create_bench_group(c, "features/sentence_case");
    let text = batch_text().replace('\n', ". ");

    group.bench_function("long_text", |b| {
        b.iter(|| black_box(transform::sentence_case(black_box(&text))));
    });

    group.finish();
}

/// Benchmark headline scoring alone
fn bench_headline_score(c: &mut Criterion) {
    let mut group = create_bench_group(c, "features/headline_score");
    let text = headline_text();
    let word_count = text.split_whitespace().count();

    group.bench_function("headline", |b| {
        b.iter(|| black_box(headline_score(black_box(&text), word_count)));
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = standard_criterion_config();
    targets = bench_case_types, bench_sentence_case, bench_headline_score
}

criterion_main!(benches);
