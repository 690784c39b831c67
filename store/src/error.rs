//! Error types for option store and configuration operations.

use thiserror::Error;

/// Errors that can occur while loading configuration or defining options.
#[derive(Debug, Error)]
pub enum StoreError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A `key=value` definition with an empty key.
    #[error("invalid option definition: {0:?}")]
    InvalidDefine(String),
}

/// Convenience alias for results with [`StoreError`].
pub type Result<T> = std::result::Result<T, StoreError>;
