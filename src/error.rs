use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for quiz operations.
///
/// Parsing and grading never fail; everything here comes from the file
/// system, serialization or the terminal.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize quiz data: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}
