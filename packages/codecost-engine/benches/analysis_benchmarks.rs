//! Analysis throughput benchmarks.
//!
//! The engine is a set of bounded-window linear scans, so wall time should
//! grow linearly with input size; these benches watch for regressions on a
//! small hot snippet and on a multi-hundred-line file.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use codecost_engine::analyze;

const NESTED_SEARCH: &str = "for (let i = 0; i < n; i++) {\n  for (let j = 0; j < n; j++) {\n    if (arr[i][j] == target) found = true;\n  }\n}";

fn large_snippet() -> String {
    let block = "function process(items) {\n  let out = \"\";\n  for (let i = 0; i < items.length; i++) {\n    for (let j = 0; j < items.length; j++) {\n      if (items[i] == items[j]) out += \",\";\n    }\n  }\n  return out;\n}\n";
    block.repeat(64)
}

fn bench_analyze(c: &mut Criterion) {
    c.bench_function("analyze_nested_search", |b| {
        b.iter(|| analyze(black_box(NESTED_SEARCH), black_box("javascript")))
    });

    let large = large_snippet();
    c.bench_function("analyze_512_line_file", |b| {
        b.iter(|| analyze(black_box(&large), black_box("javascript")))
    });

    c.bench_function("analyze_python_profile", |b| {
        b.iter(|| {
            analyze(
                black_box("for row in grid:\n    for cell in row:\n        total += cell"),
                black_box("python"),
            )
        })
    });
}

criterion_group!(benches, bench_analyze);
criterion_main!(benches);
