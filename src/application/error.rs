use std::path::PathBuf;

use thiserror::Error;

/// Failure while exporting the ledger to a file or writer.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("cannot create {}: {source}", path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write CSV record: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExportError {
    /// True when the destination could not be created, written or flushed.
    pub fn is_io_failure(&self) -> bool {
        match self {
            ExportError::Create { .. } | ExportError::Io(_) => true,
            ExportError::Csv(err) => matches!(err.kind(), csv::ErrorKind::Io(_)),
            ExportError::Json(err) => err.is_io(),
        }
    }
}
