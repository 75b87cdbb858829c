use std::path::PathBuf;
use thiserror::Error;

/// Result type for dataset operations
pub type Result<T> = std::result::Result<T, DatasetError>;

/// Errors raised while building the reference dataset.
///
/// Every variant is fatal: the bot never runs with a partial dataset.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The data file is absent or unreadable
    #[error("Failed to read reference data {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid JSON, or a record is missing a required field
    #[error("Malformed reference data: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A symbol carries `file` without `line` (or the reverse)
    #[error("Symbol {symbol:?} has `{present}` but no `{missing}`")]
    IncompleteDefinition {
        symbol: String,
        present: &'static str,
        missing: &'static str,
    },
}

impl DatasetError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
