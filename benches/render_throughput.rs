//! Schema compilation and rendering benchmarks
//!
//! Run benchmarks: `cargo bench --bench render_throughput`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tagstream::{InputType, MarkupStream, SchemaRegistry, Tag};
use tagstream_schema::xhtml::{ELEMENTS, GROUPS};

fn bench_compile(c: &mut Criterion) {
    c.bench_function("compile_xhtml_registry", |b| {
        b.iter(|| {
            SchemaRegistry::compile(
                black_box(ELEMENTS).iter().copied(),
                black_box(GROUPS).iter().copied(),
            )
            .unwrap()
        })
    });
}

/// Renders a table with `rows` rows and a small form.
fn render_document(rows: usize) -> String {
    let mut s = MarkupStream::xhtml();
    s.start("body").unwrap();
    s.start(Tag::new("table").attr("summary", "bench")).unwrap();
    for i in 0..rows {
        s.start("tr").unwrap();
        s.element(Tag::new("th").attr("align", "left").text(format!("Row {}", i)))
            .unwrap();
        s.element(Tag::new("td").attr("colspan", 2).text("a < b & c"))
            .unwrap();
        s.end("tr").unwrap();
    }
    s.end("table").unwrap();
    s.start(Tag::new("form").attr("action", "/submit")).unwrap();
    s.element(Tag::input(InputType::Text).attr("name", "q")).unwrap();
    s.end("form").unwrap();
    s.end("body").unwrap();
    s.finish().unwrap()
}

fn bench_render(c: &mut Criterion) {
    // Compile outside the measured loop.
    let _ = SchemaRegistry::xhtml();

    let mut group = c.benchmark_group("render_document");
    for rows in [10usize, 100, 1000] {
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &rows, |b, &rows| {
            b.iter(|| render_document(black_box(rows)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compile, bench_render);
criterion_main!(benches);
