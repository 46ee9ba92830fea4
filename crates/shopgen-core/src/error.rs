use thiserror::Error;

/// Core error type shared across shopgen crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A static lookup table is empty or carries unusable weights.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
    /// A string does not name a known categorical value.
    #[error("unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },
}

/// Convenience alias for results returned by shopgen crates.
pub type Result<T> = std::result::Result<T, Error>;
