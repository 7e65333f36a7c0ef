use std::io::Read;

use csv::{Reader, ReaderBuilder, Trim};
use tracing::debug;

use crate::engine::ImportError;
use crate::models::RawRow;

/// A batch of raw rows owned by whichever worker receives it.
#[derive(Debug)]
pub struct Chunk {
    /// Sequence number in production order, used for log context.
    pub id: u64,
    pub rows: Vec<RawRow>
}

/// Splits a delimited stream into chunks of at most `chunk_limit` rows.
///
/// The header line is consumed by [`ChunkProducer::new`]. Iteration yields every
/// full chunk, then a final partial one if rows remain. A read error is yielded
/// once and ends the sequence; the rows of the chunk being filled are discarded.
pub struct ChunkProducer<R: Read> {
    reader: Reader<R>,
    chunk_limit: usize,
    next_id: u64,
    finished: bool
}

impl<R: Read> ChunkProducer<R> {
    pub fn new(source: R, chunk_limit: usize) -> Result<Self, ImportError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(source);

        let mut header = RawRow::new();

        match reader.read_byte_record(&mut header) {
            Ok(true) => debug!("Discarded header {header:?}"),
            Ok(false) => return Err(ImportError::HeaderReadFailure { reason: "stream is empty".to_string() }),
            Err(error) => return Err(ImportError::HeaderReadFailure { reason: error.to_string() })
        }

        Ok(Self {
            reader,
            chunk_limit: chunk_limit.max(1),
            next_id: 0,
            finished: false
        })
    }
}

impl<R: Read> Iterator for ChunkProducer<R> {
    type Item = Result<Chunk, ImportError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let mut rows = Vec::with_capacity(self.chunk_limit);

        while rows.len() < self.chunk_limit {
            let mut row = RawRow::new();

            match self.reader.read_byte_record(&mut row) {
                Ok(true) => rows.push(row),
                Ok(false) => {
                    self.finished = true;
                    break;
                }
                Err(error) => {
                    self.finished = true;
                    return Some(Err(ImportError::StreamReadFailure(error)));
                }
            }
        }

        if rows.is_empty() {
            return None;
        }

        let chunk = Chunk { id: self.next_id, rows };
        self.next_id += 1;

        Some(Ok(chunk))
    }
}
