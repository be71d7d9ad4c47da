//! Sheet error types

use std::path::PathBuf;

use thiserror::Error;

/// Sheet configuration errors
#[derive(Error, Debug)]
pub enum SheetError {
    /// Failed to read a configuration file
    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for a sheet
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Failed to serialize a configuration
    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Configuration values out of range
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type for sheet operations
pub type Result<T> = std::result::Result<T, SheetError>;
