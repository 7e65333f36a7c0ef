use std::io::Cursor;
use std::sync::Arc;

use dashmap::DashMap;

use crate::readers::{ByteStream, SourceError, SourceReader};

/// Keyed object store held in memory.
///
/// Objects are immutable once put; opening an object hands out a cursor over a
/// shared copy of its bytes, so concurrent readers never block each other.
#[derive(Debug, Default)]
pub struct MemoryObjectReader {
    objects: DashMap<String, Arc<[u8]>>
}

impl MemoryObjectReader {
    pub fn new() -> Self {
        Self {
            objects: DashMap::new()
        }
    }

    pub fn put(&self, key: &str, bytes: impl Into<Vec<u8>>) {
        self.objects.insert(key.to_string(), Arc::from(bytes.into()));
    }
}

impl SourceReader for MemoryObjectReader {
    fn open(&self, identifier: &str) -> Result<ByteStream, SourceError> {
        let object = self.objects.get(identifier)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| SourceError::NotFound(identifier.to_string()))?;

        Ok(Box::new(Cursor::new(object)))
    }
}
