//! Classification and table resolution benchmarks.
//!
//! Measures per-value classification cost and end-to-end resolution of
//! generated tables with mixed plain, rich, numeric and boolean columns.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use richtable::{classify, ColumnSpec, ColumnType, TableDefinition, TableResolver};
use serde_json::{json, Value};
use std::io::Write;
use tempfile::NamedTempFile;

fn columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("sample_id"),
        ColumnSpec::new("organism"),
        ColumnSpec::new("source").with_type(ColumnType::RichText),
        ColumnSpec::new("diagnosis").with_type(ColumnType::RichText),
        ColumnSpec::new("age").with_type(ColumnType::Numeric),
        ColumnSpec::new("passed_qc").with_type(ColumnType::Boolean),
        ColumnSpec::new("notes"),
    ]
}

/// Generate rows resembling a sample metadata table.
fn generate_rows(rows: usize) -> Vec<Value> {
    let organisms = ["Homo sapiens", "Mus musculus", "human"];
    let diagnoses = [("CD", "Crohn's disease"), ("UC", "Ulcerative colitis")];

    (0..rows)
        .map(|row| {
            let (code, full) = diagnoses[row % diagnoses.len()];
            let mut value = json!({
                "sample_id": format!("SAMPLE_{:04}", row + 1),
                "organism": organisms[row % organisms.len()],
                "source": {
                    "value": format!("SRR{:07}", 1000000 + row),
                    "url": format!("https://www.ncbi.nlm.nih.gov/sra/SRR{:07}", 1000000 + row)
                },
                "diagnosis": {"value": code, "tooltip": full},
                "age": 25 + (row % 50),
                "passed_qc": row % 7 != 0,
            });
            if row % 10 == 0 {
                value["notes"] = json!("sequenced twice after a low-yield first run; see the lab notebook entry for the rerun details");
            }
            value
        })
        .collect()
}

/// Benchmark classifying each content shape.
fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    let inputs = [
        ("link", json!({"value": "docs", "url": "https://docs.rs", "tooltip": "API"})),
        ("tooltip", json!({"value": "UC", "tooltip": "Ulcerative colitis"})),
        ("legacy", json!({"text": "legacy"})),
        (
            "link_list",
            json!([{"value": "a", "url": "/a"}, {"value": "b", "url": "/b"}, {"value": "c", "url": "/c"}]),
        ),
    ];

    for (name, raw) in inputs.iter() {
        group.bench_with_input(BenchmarkId::new("shape", name), raw, |b, raw| {
            b.iter(|| black_box(classify(black_box(raw))))
        });
    }

    group.finish();
}

/// Benchmark resolving tables of various sizes.
fn bench_resolve_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_rows");
    let columns = columns();

    for rows in [100, 1_000, 10_000].iter() {
        let data = generate_rows(*rows);

        group.throughput(Throughput::Elements(*rows as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &data, |b, data| {
            let resolver = TableResolver::new();
            b.iter(|| black_box(resolver.resolve(&columns, &[], data).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark loading and resolving a definition file.
fn bench_resolve_definition(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_definition");

    for rows in [100, 1_000].iter() {
        let document = json!({
            "options": {"title": "Benchmark Samples"},
            "columns": columns(),
            "data": generate_rows(*rows),
        })
        .to_string();

        group.throughput(Throughput::Bytes(document.len() as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &document, |b, document| {
            b.iter_with_setup(
                || {
                    let mut temp = NamedTempFile::with_suffix(".json").unwrap();
                    temp.write_all(document.as_bytes()).unwrap();
                    temp
                },
                |temp| {
                    let definition = TableDefinition::load(temp.path()).unwrap();
                    black_box(TableResolver::new().resolve_definition(&definition).unwrap())
                },
            )
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_classify,
    bench_resolve_rows,
    bench_resolve_definition,
);
criterion_main!(benches);
