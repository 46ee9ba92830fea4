use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted while writing the database file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to prepare {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("database error: {0}")]
    Database(#[from] duckdb::Error),
    #[error("row for table '{table}' has {found} values, expected {expected}")]
    RowShape {
        table: &'static str,
        expected: usize,
        found: usize,
    },
}
