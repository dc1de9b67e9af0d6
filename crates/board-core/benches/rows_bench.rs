//! Criterion benchmarks for the document↔rows mapping.
//!
//! The table is tiny (twelve rows), so these exist to catch accidental
//! quadratic behaviour or per-row allocation regressions, not to tune
//! hot paths.
//!
//! Run with:
//! ```bash
//! cargo bench --package board-core --bench rows_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use board_core::{apply_override, flatten_document, SheetRow, StatusDocument};

fn make_override_rows() -> Vec<SheetRow> {
    let mut doc = StatusDocument::default();
    doc.strategy.general = "override".to_string();
    doc.recording.notes = "override".to_string();
    flatten_document(&doc)
}

fn bench_flatten(c: &mut Criterion) {
    let doc = StatusDocument::default();
    c.bench_function("flatten_document", |b| {
        b.iter(|| flatten_document(black_box(&doc)));
    });
}

fn bench_apply_all_rows(c: &mut Criterion) {
    let rows = make_override_rows();
    c.bench_function("apply_override_all_rows", |b| {
        b.iter(|| {
            let mut doc = StatusDocument::default();
            for row in rows[1..].iter() {
                apply_override(black_box(&mut doc), black_box(row));
            }
            doc
        });
    });
}

criterion_group!(benches, bench_flatten, bench_apply_all_rows);
criterion_main!(benches);
