use std::sync::atomic::{AtomicU64, Ordering};

/// Counters describing a finished import.
///
/// Informational only: a run with rejected rows or failed batches still succeeds.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct ImportSummary {
    pub chunks: u64,
    pub rows_read: u64,
    pub records_submitted: u64,
    pub rows_rejected: u64,
    pub batches_failed: u64
}

/// Shared counters updated by the producer and the workers.
#[derive(Debug, Default)]
pub(crate) struct ImportStats {
    chunks: AtomicU64,
    rows_read: AtomicU64,
    records_submitted: AtomicU64,
    rows_rejected: AtomicU64,
    batches_failed: AtomicU64
}

impl ImportStats {
    pub(crate) fn chunk_produced(&self, rows: usize) {
        self.chunks.fetch_add(1, Ordering::Relaxed);
        self.rows_read.fetch_add(rows as u64, Ordering::Relaxed);
    }

    pub(crate) fn row_rejected(&self) {
        self.rows_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn batch_persisted(&self, records: usize) {
        self.records_submitted.fetch_add(records as u64, Ordering::Relaxed);
    }

    pub(crate) fn batch_failed(&self) {
        self.batches_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> ImportSummary {
        ImportSummary {
            chunks: self.chunks.load(Ordering::Relaxed),
            rows_read: self.rows_read.load(Ordering::Relaxed),
            records_submitted: self.records_submitted.load(Ordering::Relaxed),
            rows_rejected: self.rows_rejected.load(Ordering::Relaxed),
            batches_failed: self.batches_failed.load(Ordering::Relaxed)
        }
    }
}
