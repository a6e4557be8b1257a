//! Benchmarks for litdoc parsing and rendering performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic literate Python sources.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Creates a synthetic literate source with the given number of sections.
fn create_test_source(sections: usize) -> String {
    let mut text = String::from("#!/usr/bin/env python\n# # Benchmark module\n\nimport os\n\n");

    for i in 0..sections {
        text.push_str(&format!("# ## Section {}\n", i));
        text.push_str("# Prose describing the next function in a few lines.\n");
        text.push_str("# It continues here.\n#\n# And adds a second paragraph.\n");
        text.push_str(&format!("def handler_{}(value):\n", i));
        text.push_str("    # inline note\n");
        text.push_str("    result = value * 2\n");
        text.push_str("    return result\n\n");
    }

    text
}

/// Benchmark line classification and segmentation.
fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    for sections in [10, 100, 1000].iter() {
        let text = create_test_source(*sections);

        group.bench_function(format!("{}_sections", sections), |b| {
            b.iter(|| litdoc::parse_str("bench.py", black_box(&text)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark Markdown rendering of an already parsed document.
fn bench_rendering(c: &mut Criterion) {
    let doc = litdoc::parse_str("bench.py", &create_test_source(100)).unwrap();

    c.bench_function("render_default", |b| {
        let options = litdoc::RenderOptions::new();
        b.iter(|| litdoc::render::to_markdown(black_box(&doc), &options).unwrap());
    });

    c.bench_function("render_all_options", |b| {
        let options = litdoc::RenderOptions::new()
            .with_inline(true)
            .with_title(true)
            .with_linenums(true)
            .with_highlights(true)
            .with_toc(true);
        b.iter(|| litdoc::render::to_markdown(black_box(&doc), &options).unwrap());
    });
}

/// Benchmark language detection from file names.
fn bench_detection(c: &mut Criterion) {
    c.bench_function("detect_language", |b| {
        b.iter(|| litdoc::detect_language(black_box("pkg/module/tool.py")));
    });
}

criterion_group!(benches, bench_parsing, bench_rendering, bench_detection);
criterion_main!(benches);
