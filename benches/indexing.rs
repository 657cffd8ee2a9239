//! Index construction benchmarks.
//!
//! Run with: `cargo bench`
//! Save baseline: `cargo bench -- --save-baseline main`
//! Compare: `cargo bench -- --baseline main`

use criterion::{Criterion, criterion_group, criterion_main};
use sfxi::build_index;
use std::hint::black_box;

/// Deterministic pseudo-text of roughly `len` bytes
fn sample_text(len: usize) -> String {
    const WORDS: &[&str] = &[
        "banana", "bandana", "anagram", "cabana", "sonata", "salsa", "nave",
    ];

    let mut text = String::with_capacity(len + 8);
    let mut state = 0x9e3779b9u32;
    while text.len() < len {
        state = state.wrapping_mul(1664525).wrapping_add(1013904223);
        text.push_str(WORDS[(state >> 16) as usize % WORDS.len()]);
        text.push(' ');
    }
    text.truncate(len);
    text
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for &size in &[256usize, 1024, 4096] {
        let text = sample_text(size);
        group.bench_function(format!("text_{}", size), |b| {
            b.iter(|| build_index(black_box(&text)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
