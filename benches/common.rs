//! Shared benchmark utilities.

use std::ops::Range;
use std::time::Duration;

use criterion::{BenchmarkGroup, Criterion, measurement::WallTime};
use fake::Fake;
use fake::faker::lorem::en::Words;

/// Generate random lines of lowercase words for benchmarks.
#[must_use]
pub fn generate_sample_text(lines: usize, words_per_line: Range<usize>) -> String {
    (0..lines)
        .map(|_| {
            Words(words_per_line.clone())
                .fake::<Vec<String>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// A single headline-sized line.
#[must_use]
pub fn headline_text() -> String {
    generate_sample_text(1, 6..12)
}

/// Many lines of text (~50KB).
#[must_use]
pub fn batch_text() -> String {
    generate_sample_text(800, 6..12)
}

/// Standard Criterion configuration.
#[must_use]
pub fn standard_criterion_config() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(20)
        .measurement_time(Duration::from_secs(3))
        .warm_up_time(Duration::from_secs(1))
}

/// Create named benchmark group.
pub fn create_bench_group<'a>(c: &'a mut Criterion, name: &str) -> BenchmarkGroup<'a, WallTime> {
    c.benchmark_group(name)
}
