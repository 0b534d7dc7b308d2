use crate::domain::model::{AddressRecord, ChunkProgress, InsertOutcome};
use crate::domain::ports::{InventoryStore, ProgressSink};
use crate::utils::error::{FillerError, Result};

/// Write one batch into the inventory, `chunk_size` records at a time.
///
/// Chunks run sequentially; every chunk write is insert-if-absent, so rows
/// already present count as skipped rather than erroring. A storage failure
/// abandons the batch's remaining chunks and surfaces the counts accumulated
/// so far; chunks already written stay written.
pub async fn load_batch<S, P>(
    store: &S,
    progress: &P,
    batch: usize,
    records: &[AddressRecord],
    chunk_size: usize,
) -> Result<InsertOutcome>
where
    S: InventoryStore + ?Sized,
    P: ProgressSink + ?Sized,
{
    let mut outcome = InsertOutcome::default();
    let mut written = 0u64;
    let batch_total = records.len() as u64;

    for chunk in records.chunks(chunk_size) {
        let inserted = match store.insert_missing(chunk).await {
            Ok(inserted) => inserted,
            Err(source) => {
                return Err(FillerError::Load {
                    batch,
                    inserted: outcome.inserted,
                    skipped: outcome.skipped,
                    source: Box::new(source),
                })
            }
        };

        outcome.inserted += inserted;
        outcome.skipped += chunk.len() as u64 - inserted;
        written += chunk.len() as u64;

        progress.on_chunk(&ChunkProgress {
            batch,
            written,
            batch_total,
            inserted: outcome.inserted,
            skipped: outcome.skipped,
        });
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    /// In-memory (region, address) key set; optionally fails from the Nth
    /// insert call onward.
    struct MemoryStore {
        rows: Arc<Mutex<HashSet<(String, u32)>>>,
        fail_from_call: Option<usize>,
        calls: Mutex<usize>,
    }

    impl MemoryStore {
        fn new() -> Self {
            Self {
                rows: Arc::new(Mutex::new(HashSet::new())),
                fail_from_call: None,
                calls: Mutex::new(0),
            }
        }

        fn failing_from(call: usize) -> Self {
            Self {
                fail_from_call: Some(call),
                ..Self::new()
            }
        }

        fn row_count(&self) -> usize {
            self.rows.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl InventoryStore for MemoryStore {
        async fn region_exists(&self, _region: &str) -> Result<bool> {
            Ok(true)
        }

        async fn insert_missing(&self, records: &[AddressRecord]) -> Result<u64> {
            let mut calls = self.calls.lock().unwrap();
            *calls += 1;
            if let Some(limit) = self.fail_from_call {
                if *calls >= limit {
                    return Err(FillerError::EmptyInput {
                        message: "injected storage failure".to_string(),
                    });
                }
            }

            let mut rows = self.rows.lock().unwrap();
            let mut inserted = 0;
            for record in records {
                if rows.insert((record.region.clone(), record.address)) {
                    inserted += 1;
                }
            }
            Ok(inserted)
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        updates: Mutex<Vec<ChunkProgress>>,
    }

    impl ProgressSink for RecordingSink {
        fn on_chunk(&self, progress: &ChunkProgress) {
            self.updates.lock().unwrap().push(*progress);
        }
    }

    fn records(count: u32) -> Vec<AddressRecord> {
        (0..count)
            .map(|a| AddressRecord::new("us-east-1", a))
            .collect()
    }

    #[tokio::test]
    async fn test_load_reports_progress_per_chunk() {
        let store = MemoryStore::new();
        let sink = RecordingSink::default();

        let outcome = load_batch(&store, &sink, 0, &records(250), 100).await.unwrap();

        assert_eq!(outcome, InsertOutcome { inserted: 250, skipped: 0 });

        let updates = sink.updates.lock().unwrap();
        assert_eq!(updates.len(), 3);
        assert_eq!(updates[0].written, 100);
        assert_eq!(updates[1].written, 200);
        assert_eq!(updates[2].written, 250);
        assert!(updates.iter().all(|u| u.batch_total == 250));
    }

    #[tokio::test]
    async fn test_second_load_skips_everything() {
        let store = MemoryStore::new();
        let sink = RecordingSink::default();
        let batch = records(42);

        let first = load_batch(&store, &sink, 0, &batch, 10).await.unwrap();
        assert_eq!(first, InsertOutcome { inserted: 42, skipped: 0 });

        let second = load_batch(&store, &sink, 0, &batch, 10).await.unwrap();
        assert_eq!(second, InsertOutcome { inserted: 0, skipped: 42 });
        assert_eq!(store.row_count(), 42);
    }

    #[tokio::test]
    async fn test_storage_failure_carries_partial_counts() {
        // Third insert call fails: two chunks of 10 land first.
        let store = MemoryStore::failing_from(3);
        let sink = RecordingSink::default();

        let err = load_batch(&store, &sink, 7, &records(50), 10)
            .await
            .unwrap_err();

        match err {
            FillerError::Load {
                batch,
                inserted,
                skipped,
                ..
            } => {
                assert_eq!(batch, 7);
                assert_eq!(inserted, 20);
                assert_eq!(skipped, 0);
            }
            other => panic!("unexpected error: {other}"),
        }

        // Committed chunks stay committed, the rest was never attempted.
        assert_eq!(store.row_count(), 20);
        assert_eq!(sink.updates.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_empty_batch_is_a_no_op() {
        let store = MemoryStore::new();
        let sink = RecordingSink::default();

        let outcome = load_batch(&store, &sink, 0, &[], 100).await.unwrap();

        assert_eq!(outcome, InsertOutcome::default());
        assert_eq!(*store.calls.lock().unwrap(), 0);
        assert!(sink.updates.lock().unwrap().is_empty());
    }
}
