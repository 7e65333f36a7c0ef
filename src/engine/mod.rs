mod config;
mod errors;
mod importer;
mod producer;
mod summary;
mod worker;

pub use config::{ImportConfig, DEFAULT_CHUNK_LIMIT, DEFAULT_CONCURRENCY};
pub use errors::ImportError;
pub use importer::ChunkImporter;
pub use producer::{Chunk, ChunkProducer};
pub use summary::ImportSummary;
