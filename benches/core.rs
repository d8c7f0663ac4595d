//! Core benchmarks for title case under each citation style.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use title_fix::{Options, Processing, Style, TitleCaser, process_lines};

#[path = "common.rs"]
pub mod common;
use self::common::{batch_text, create_bench_group, headline_text, standard_criterion_config};

/// Benchmark title casing a single headline per style
fn bench_styles(c: &mut Criterion) {
    let mut group = create_bench_group(c, "core/styles");
    let text = headline_text();

    for style in Style::ALL {
        let caser = TitleCaser::new(&Options::default().with_style(style));
        group.bench_function(style.as_str(), |b| {
            b.iter(|| black_box(caser.case(black_box(&text))));
        });
    }

    group.finish();
}

/// Benchmark custom acronyms and uppercase preservation
fn bench_title_options(c: &mut Criterion) {
    let mut group = create_bench_group(c, "core/title_options");
    let text = headline_text().to_uppercase();

    let variants = [
        ("default", Options::default()),
        (
            "acronyms",
            Options::default().with_acronyms(["api", "sdk", "http", "json"]),
        ),
        (
            "preserve_uppercase",
            Options::default().with_preserve_uppercase(true),
        ),
    ];

    for (name, options) in &variants {
        let caser = TitleCaser::new(options);
        group.bench_function(*name, |b| {
            b.iter(|| black_box(caser.case(black_box(&text))));
        });
    }

    group.finish();
}

/// Benchmark sequential vs parallel batches of lines
fn bench_batches(c: &mut Criterion) {
    let mut group = create_bench_group(c, "core/batches");
    let text = batch_text();

    for processing in [Processing::Sequential, Processing::Parallel] {
        let options = Options::default().with_processing(processing);
        group.bench_function(processing.to_string(), |b| {
            b.iter(|| black_box(process_lines(black_box(&text), &options)));
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = standard_criterion_config();
    targets = bench_styles, bench_title_options, bench_batches
}

criterion_main!(benches);
