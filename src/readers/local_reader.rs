use std::fs::File;
use std::io::{BufReader, ErrorKind};

use crate::readers::{ByteStream, SourceError, SourceReader};

/// Reads sources from the local filesystem; identifiers are paths.
#[derive(Debug, Default)]
pub struct LocalFileReader;

impl LocalFileReader {
    pub fn new() -> Self {
        Self
    }
}

impl SourceReader for LocalFileReader {
    fn open(&self, identifier: &str) -> Result<ByteStream, SourceError> {
        match File::open(identifier) {
            Ok(file) => Ok(Box::new(BufReader::new(file))),
            Err(error) if error.kind() == ErrorKind::NotFound => Err(SourceError::NotFound(identifier.to_string())),
            Err(error) => Err(SourceError::Io(error))
        }
    }
}
