use thiserror::Error;

/// Errors emitted while summarizing a database.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("database error: {0}")]
    Database(#[from] duckdb::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
