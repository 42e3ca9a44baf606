use criterion::{Criterion, black_box, criterion_group, criterion_main};
use linepad_engine::editing::{Document, Editor};
mod common;

fn bench_document_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("document_serialization");
    group.sample_size(20);

    let blob = common::generate_lines(1000);
    group.bench_function("rebuild", |b| {
        b.iter(|| {
            let doc = Document::from_blob(black_box(&blob));
            black_box(doc);
        });
    });

    let doc = Document::from_blob(&blob);
    group.bench_function("flatten", |b| {
        b.iter(|| {
            let text = doc.flatten();
            black_box(text);
        });
    });

    group.finish();
}

fn bench_document_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("document_lookup");

    let doc = Document::from_blob(&common::generate_lines(1000));
    group.bench_function("line_at_last", |b| {
        b.iter(|| {
            let line = doc.line_at(black_box(999));
            black_box(line);
        });
    });

    let mut editor = Editor::new();
    editor.rebuild_from_blob(&common::generate_lines(1000));
    group.bench_function("search", |b| {
        b.iter(|| {
            let hits = editor.search(black_box("content"));
            black_box(hits.map(|hits| hits.len()).unwrap_or(0));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_document_serialization, bench_document_lookup);
criterion_main!(benches);
