//! PiiShield error types

use std::path::PathBuf;
use thiserror::Error;

/// PiiShield error type
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Privacy pattern error
    #[error("Privacy error: {0}")]
    Privacy(String),

    /// Input file does not exist
    #[error("Input file '{}' not found", .0.display())]
    InputNotFound(PathBuf),

    /// Input file has no header row
    #[error("Input file '{}' is empty", .0.display())]
    EmptyInput(PathBuf),

    /// Header row is too short to carry record ids and payloads
    #[error("Input file must have at least 2 columns (record_id, data_json), found {columns}")]
    InvalidHeader { columns: usize },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Config file parse error
    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias for PiiShield operations
pub type Result<T> = std::result::Result<T, Error>;
