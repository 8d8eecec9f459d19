use thiserror::Error;

/// Top-level error type for the coinwise system.
///
/// Each variant wraps a subsystem-specific failure. Crates define their own
/// error types where the caller can act on individual cases and convert into
/// `CoinwiseError` at the boundary so the `?` operator works across crates.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CoinwiseError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for CoinwiseError {
    fn from(err: toml::de::Error) -> Self {
        CoinwiseError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for CoinwiseError {
    fn from(err: toml::ser::Error) -> Self {
        CoinwiseError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for CoinwiseError {
    fn from(err: serde_json::Error) -> Self {
        CoinwiseError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for coinwise operations.
pub type Result<T> = std::result::Result<T, CoinwiseError>;
