use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Batch of {size} records was rejected: {reason}")]
    Rejected {
        size: usize,
        reason: String
    },
    #[error("View [{0}] does not exist")]
    UnknownView(String)
}
