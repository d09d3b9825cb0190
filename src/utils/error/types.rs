//! Error types for the console core

use thiserror::Error;

/// Result type alias for the console core
pub type Result<T> = std::result::Result<T, ConsoleError>;

/// Main error type for the console core
///
/// Authorization checks and the table query codec are total and never return
/// errors; this type only surfaces at trust boundaries such as configuration
/// loading and permission-string parsing.
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Malformed permission string
    #[error("Invalid permission: {0}")]
    InvalidPermission(String),

    /// Unknown role label
    #[error("Invalid role: {0}")]
    InvalidRole(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),
}
