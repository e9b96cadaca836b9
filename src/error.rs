//! Error types for AqlStore
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using AqlError
pub type Result<T> = std::result::Result<T, AqlError>;

/// Unified error type for AqlStore operations
#[derive(Debug, Error)]
pub enum AqlError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Decode Errors
    // -------------------------------------------------------------------------
    /// A field token could not be parsed (line is 1-based)
    #[error("Format error at line {line}: {message}")]
    Format { line: usize, message: String },

    /// A record block with a non-positive id (strict mode only)
    #[error("Invalid record at line {line}: id {id} is not positive")]
    InvalidRecord { line: usize, id: i64 },

    #[error("Header error: {0}")]
    Header(String),

    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("No record ids left to assign")]
    IdExhausted,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
