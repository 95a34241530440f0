//! # Error Types
//!
//! This module defines error types used throughout the matriz library.

use thiserror::Error;

/// Main error type for matriz operations
#[derive(Debug, Error)]
pub enum MatrizError {
    /// Transport-level errors (connection, I/O)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Invalid command or parameter
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
