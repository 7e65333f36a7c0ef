use std::sync::Arc;

use tokio::spawn;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

use crate::engine::producer::Chunk;
use crate::engine::summary::ImportStats;
use crate::models::parse_record;
use crate::storage::BatchSink;

/// Receiving end of the chunk queue, shared by every worker.
pub(crate) type ChunkQueue = Arc<Mutex<mpsc::Receiver<Chunk>>>;

pub(crate) struct ChunkWorker {
    sink: Arc<dyn BatchSink>,
    stats: Arc<ImportStats>,
    reference_year: i32
}

impl ChunkWorker {
    pub(crate) fn new(sink: Arc<dyn BatchSink>, stats: Arc<ImportStats>, reference_year: i32) -> Self {
        Self { sink, stats, reference_year }
    }

    /// Spawns the worker loop; it exits once the queue is closed and empty.
    pub(crate) fn spawn(self, worker_id: usize, queue: ChunkQueue) -> JoinHandle<()> {
        spawn(async move {
            loop {
                //NOTE: The lock is only held while waiting for the next chunk, never while processing one
                let next = queue.lock().await.recv().await;

                let Some(chunk) = next else {
                    break;
                };

                self.process(worker_id, chunk).await;
            }

            debug!("Worker [{worker_id}] drained");
        })
    }

    async fn process(&self, worker_id: usize, chunk: Chunk) {
        let mut batch = Vec::with_capacity(chunk.rows.len());

        for row in &chunk.rows {
            match parse_record(row, self.reference_year) {
                Ok(record) => batch.push(record),
                Err(error) => {
                    self.stats.row_rejected();
                    warn!("Skipping row in chunk [{}]: {error}", chunk.id);
                }
            }
        }

        if batch.is_empty() {
            warn!("Chunk [{}] produced no valid records", chunk.id);
            return;
        }

        let size = batch.len();

        match self.sink.persist(batch).await {
            Ok(()) => {
                self.stats.batch_persisted(size);
                debug!("Worker [{worker_id}] persisted chunk [{}] with [{size}] records", chunk.id);
            }
            Err(error) => {
                self.stats.batch_failed();
                error!("Worker [{worker_id}] failed to persist chunk [{}] with [{size}] records: {error}", chunk.id);
            }
        }
    }
}
