use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use docsift_engine::{
    Catalog, DocumentConverter, HtmlConverter, NullObserver,
    scan::{scan_tables, scan_text},
};
mod common;

fn bench_scan(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    let purpose = catalog.get("purpose_scope").unwrap();
    let workflow = catalog.get("approval_workflow").unwrap();

    let mut group = c.benchmark_group("scan");
    group.sample_size(20);

    for sections in [10, 100] {
        let html = common::generate_analysis_document(sections);
        let tree = HtmlConverter.convert(html.into_bytes()).unwrap();
        group.throughput(Throughput::Elements(tree.len() as u64));

        group.bench_with_input(BenchmarkId::new("text", sections), &tree, |b, tree| {
            b.iter(|| std::hint::black_box(scan_text(tree, purpose, &NullObserver)));
        });
        group.bench_with_input(BenchmarkId::new("tables", sections), &tree, |b, tree| {
            b.iter(|| std::hint::black_box(scan_tables(tree, workflow, &NullObserver)));
        });
    }

    group.finish();
}

fn bench_parse_all(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    let bytes = common::generate_analysis_document(50).into_bytes();

    let mut group = c.benchmark_group("catalog");
    group.sample_size(10);
    group.throughput(Throughput::Bytes(bytes.len() as u64));
    group.bench_function("parse_all", |b| {
        b.iter(|| {
            let results = catalog.parse_all(
                std::hint::black_box(&bytes),
                &HtmlConverter,
                &NullObserver,
            );
            std::hint::black_box(results);
        });
    });
    group.finish();
}

criterion_group!(benches, bench_scan, bench_parse_all);
criterion_main!(benches);
