//! Error type shared across the crate.
//!
//! Queries never fail; errors only come from ingestion-side validation and
//! configuration loading.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, IndexError>;

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[cfg(feature = "toml")]
    #[error("TOML parse error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[cfg(feature = "toml")]
    #[error("TOML write error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}
