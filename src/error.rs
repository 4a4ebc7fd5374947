//! Error types for the character generation engine
//!
//! Only malformed input is an error. Rule violations are reported by the
//! validator as an illegal verdict, never raised.

use thiserror::Error;

/// Main error type for the character generation engine
#[derive(Error, Debug)]
pub enum ChargenError {
    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Unknown tier: {0}")]
    UnknownTier(String),

    #[error("Document contains no character")]
    EmptyDocument,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ChargenError {
    /// Build a missing-field error from a path of document keys
    pub fn missing(path: &[&str]) -> Self {
        ChargenError::MissingField(path.join("."))
    }
}

/// Result type alias for the character generation engine
pub type Result<T> = std::result::Result<T, ChargenError>;
