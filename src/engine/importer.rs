use std::io::Read;
use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::{mpsc, Mutex};
use tokio::task::{spawn_blocking, JoinHandle};
use tracing::{debug, error, info, warn};

use crate::engine::producer::{Chunk, ChunkProducer};
use crate::engine::summary::ImportStats;
use crate::engine::worker::ChunkWorker;
use crate::engine::{ImportConfig, ImportError, ImportSummary};
use crate::events::{CompletionNotifier, EventBus};
use crate::readers::SourceReader;
use crate::storage::BatchSink;

/// Drives a chunked import: one producer feeding a bounded queue drained by a fixed worker pool.
pub struct ChunkImporter {
    sink: Arc<dyn BatchSink>,
    notifier: CompletionNotifier,
    config: ImportConfig
}

impl ChunkImporter {
    pub fn new(sink: Arc<dyn BatchSink>, bus: Arc<dyn EventBus>, config: ImportConfig) -> Self {
        Self {
            sink,
            notifier: CompletionNotifier::new(bus),
            config
        }
    }

    /// Opens `identifier` through `reader` and imports it.
    pub async fn import(&self, reader: &dyn SourceReader, identifier: &str) -> Result<ImportSummary, ImportError> {
        let source = reader.open(identifier).map_err(|source| ImportError::SourceOpen {
            identifier: identifier.to_string(),
            source
        })?;

        info!("Importing [{identifier}]");

        self.run(source).await
    }

    /// Imports every data row of `source` and signals completion once all workers have drained.
    ///
    /// Rows that fail to parse and batches the sink rejects are logged and skipped.
    /// Only a header or stream read failure (or a crashed task) fails the run, and
    /// in that case no completion event is dispatched.
    pub async fn run<R: Read + Send + 'static>(&self, source: R) -> Result<ImportSummary, ImportError> {
        let ImportConfig { chunk_limit, concurrency, reference_year } = self.config;
        let concurrency = concurrency.max(1);

        info!("Starting import with [{concurrency}] workers and chunks of [{chunk_limit}] rows");

        let stats = Arc::new(ImportStats::default());
        let (sender, receiver) = mpsc::channel::<Chunk>(concurrency);
        let queue = Arc::new(Mutex::new(receiver));

        let workers: Vec<JoinHandle<()>> = (0..concurrency)
            .map(|worker_id| {
                ChunkWorker::new(self.sink.clone(), stats.clone(), reference_year)
                    .spawn(worker_id, queue.clone())
            })
            .collect();

        drop(queue);

        //NOTE: The sender moves into the producer, so the queue closes as soon as production ends
        let production = Self::spawn_producer(source, chunk_limit, sender, stats.clone()).await;

        let mut worker_failure = None;

        for result in join_all(workers).await {
            if let Err(error) = result {
                error!("A worker did not finish gracefully: {error}");
                if worker_failure.is_none() {
                    worker_failure = Some(error);
                }
            }
        }

        let summary = stats.snapshot();
        info!("All workers drained: {summary:?}");

        match production {
            Ok(Ok(chunks)) => debug!("Producer emitted [{chunks}] chunks"),
            Ok(Err(error)) => {
                error!("Import aborted: {error}");
                return Err(error);
            }
            Err(error) => {
                error!("Producer did not finish gracefully: {error}");
                return Err(ImportError::TaskFailure(error));
            }
        }

        if let Some(error) = worker_failure {
            return Err(ImportError::TaskFailure(error));
        }

        self.notifier.notify();

        Ok(summary)
    }

    fn spawn_producer<R: Read + Send + 'static>(
        source: R,
        chunk_limit: usize,
        sender: mpsc::Sender<Chunk>,
        stats: Arc<ImportStats>
    ) -> JoinHandle<Result<u64, ImportError>> {
        spawn_blocking(move || -> Result<u64, ImportError> {
            let producer = ChunkProducer::new(source, chunk_limit)?;
            let mut emitted = 0;

            for chunk in producer {
                let chunk = chunk?;
                let rows = chunk.rows.len();
                debug!("Queueing chunk [{}] with [{rows}] rows", chunk.id);

                if sender.blocking_send(chunk).is_err() {
                    warn!("No worker is accepting chunks, halting production");
                    break;
                }

                stats.chunk_produced(rows);
                emitted += 1;
            }

            Ok(emitted)
        })
    }
}
