mod errors;
mod local_reader;
mod memory_reader;

use std::io::Read;

pub use errors::SourceError;
pub use local_reader::LocalFileReader;
pub use memory_reader::MemoryObjectReader;

/// A readable byte stream handed to the chunk producer.
pub type ByteStream = Box<dyn Read + Send>;

/// Opens an import source by identifier (a filesystem path, an object key, ...).
pub trait SourceReader: Send + Sync + 'static {
    fn open(&self, identifier: &str) -> Result<ByteStream, SourceError>;
}
