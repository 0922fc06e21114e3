//! Error types shared across the eligibility workspace

use thiserror::Error;

/// Result type alias for common operations
pub type Result<T> = std::result::Result<T, E9yError>;

/// Main error type for E9Y
#[derive(Error, Debug)]
pub enum E9yError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Organization not found: {0}")]
    OrganizationNotFound(i64),

    #[error("File not found: {0}")]
    FileNotFound(i64),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl E9yError {
    /// Short, stable identifier suitable for a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            E9yError::Io(_) => "io",
            E9yError::Serialization(_) => "serialization",
            E9yError::Config(_) => "config",
            E9yError::Storage(_) => "storage",
            E9yError::Parse(_) => "parse",
            E9yError::OrganizationNotFound(_) => "organization_not_found",
            E9yError::FileNotFound(_) => "file_not_found",
            E9yError::Unknown(_) => "unknown",
        }
    }
}
