use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Source [{0}] was not found")]
    NotFound(String),
    #[error("Source I/O error: {0}")]
    Io(#[from] std::io::Error)
}
