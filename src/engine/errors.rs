use thiserror::Error;
use tokio::task::JoinError;

use crate::readers::SourceError;

/// Failures that abort an import. Row and batch failures never surface here.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Unable to open source [{identifier}]: {source}")]
    SourceOpen {
        identifier: String,
        #[source]
        source: SourceError
    },
    #[error("Unable to read header: {reason}")]
    HeaderReadFailure {
        reason: String
    },
    #[error("Unable to read stream: {0}")]
    StreamReadFailure(#[source] csv::Error),
    #[error("Import task did not complete: {0}")]
    TaskFailure(#[from] JoinError)
}
