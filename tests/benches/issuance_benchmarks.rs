//! # Hall Ticket Benchmarks
//!
//! | Component | Claim | Target |
//! |-----------|-------|--------|
//! | ht-01 Identity | SHA-256 over four short fields | < 5µs |
//! | ht-02 Record Store | O(1) duplicate check | < 1µs |
//! | ht-02 Record Store | Index rebuild on open | linear in rows |
//! | ht-04 Issuance | Duplicate rejection skips rendering | < 10µs |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ht_01_identity::IdentityHasher;
use ht_02_record_store::{InMemoryRecordTable, RecordStore, RecordStoreApi};
use ht_03_document_composer::{
    ComposerConfig, DocumentComposer, ExamSchedule, RecordingRenderer, StaticEncoder,
};
use ht_04_issuance::{IssuanceApi, IssuancePipeline, PipelineConfig};
use shared_types::{CandidateFields, FixedClock, IssuanceRecord};

fn candidate(i: usize) -> CandidateFields {
    CandidateFields::new(
        format!("R{:06}", i),
        "Asha",
        "2005-01-01",
        "ABC College",
    )
}

fn records(count: usize) -> Vec<IssuanceRecord> {
    let hasher = IdentityHasher::new();
    let date = chrono::NaiveDate::from_ymd_opt(2026, 10, 19).unwrap_or_default();
    (0..count)
        .map(|i| {
            let fields = candidate(i);
            let id = hasher.identify(&fields);
            IssuanceRecord::new(&fields, format!("hall_tickets/{}.pdf", id), id, date)
        })
        .collect()
}

// ============================================================================
// HT-01: Identity
// ============================================================================

fn bench_identify(c: &mut Criterion) {
    let mut group = c.benchmark_group("ht-01-identity");
    let hasher = IdentityHasher::new();
    let fields = candidate(42);

    group.bench_function("identify", |b| {
        b.iter(|| black_box(hasher.identify(black_box(&fields))))
    });
    group.finish();
}

// ============================================================================
// HT-02: Record Store
// ============================================================================

fn bench_register(c: &mut Criterion) {
    let mut group = c.benchmark_group("ht-02-record-store");

    for size in [1_000usize, 10_000, 100_000] {
        let rows = records(size);
        let probe = rows[size / 2].identifier.clone();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("open_and_index", size), &rows, |b, rows| {
            b.iter(|| {
                RecordStore::with_table(InMemoryRecordTable::with_rows(rows.clone()))
                    .map(|store| store.len())
            })
        });

        if let Ok(store) = RecordStore::with_table(InMemoryRecordTable::with_rows(rows)) {
            group.bench_with_input(BenchmarkId::new("contains", size), &probe, |b, probe| {
                b.iter(|| black_box(store.contains(black_box(probe))))
            });
        }
    }
    group.finish();
}

// ============================================================================
// HT-04: Issuance
// ============================================================================

fn bench_duplicate_rejection(c: &mut Criterion) {
    let mut group = c.benchmark_group("ht-04-issuance");
    let Ok(dir) = tempfile::TempDir::new() else {
        return;
    };
    let Ok(store) = RecordStore::with_table(InMemoryRecordTable::new()) else {
        return;
    };
    let composer = DocumentComposer::new(
        RecordingRenderer::new(),
        StaticEncoder::new(),
        ExamSchedule::default(),
        ComposerConfig::default().with_scratch_dir(dir.path().join("scratch")),
    );
    let date = chrono::NaiveDate::from_ymd_opt(2026, 10, 19).unwrap_or_default();
    let mut pipeline = IssuancePipeline::new(
        store,
        composer,
        FixedClock(date),
        PipelineConfig::new(dir.path().join("hall_tickets")),
    );
    let fields = candidate(7);
    if pipeline.issue(&fields, None).is_err() {
        return;
    }

    group.bench_function("duplicate_rejection", |b| {
        b.iter(|| black_box(pipeline.issue(black_box(&fields), None)))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_identify,
    bench_register,
    bench_duplicate_rejection
);
criterion_main!(benches);
