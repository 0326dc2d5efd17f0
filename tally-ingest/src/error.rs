use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading a statement. Any of these aborts the whole load.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("statement not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("cannot open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed statement data: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: unreadable record: {source}")]
    Record {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("header row has no '{column}' column")]
    MissingColumn { column: String },

    #[error("row {row}: missing '{column}' field [{raw}]")]
    MissingField {
        row: usize,
        column: String,
        raw: String,
    },

    #[error("row {row}: cannot parse '{column}' value '{value}': {reason} [{raw}]")]
    Parse {
        row: usize,
        column: String,
        value: String,
        reason: String,
        raw: String,
    },
}

impl IngestError {
    /// 1-based data row the error refers to, if any.
    pub fn row(&self) -> Option<usize> {
        match self {
            IngestError::Record { row, .. }
            | IngestError::MissingField { row, .. }
            | IngestError::Parse { row, .. } => Some(*row),
            _ => None,
        }
    }
}
