use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for trace generation.
#[derive(Debug, Error)]
pub enum AppError {
    /// Input file could not be opened or read.
    #[error("Failed to read input file '{}': {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Input file is not valid JSON.
    #[error("Failed to parse input file '{}' as JSON: {source}", .path.display())]
    ParseInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Input parsed but the top level is not an object.
    #[error("Input must be a JSON object.")]
    InputNotObject,

    /// Trace document could not be serialized.
    #[error("Failed to render trace: {0}")]
    Render(#[source] serde_json::Error),

    /// Underlying I/O failure while writing output.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl AppError {
    /// Provide an `io::ErrorKind` view for callers that branch on failure class.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::ReadInput { source, .. } => source.kind(),
            AppError::Io(err) => err.kind(),
            AppError::ParseInput { .. } | AppError::InputNotObject => io::ErrorKind::InvalidData,
            AppError::Render(_) => io::ErrorKind::Other,
        }
    }
}
