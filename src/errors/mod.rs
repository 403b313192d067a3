//! Error types for the ctxlog crate.
//!
//! Configuration errors are recovered inside the engine accessor and never
//! cross the public API; they exist so the config loader can report *why* a
//! source was rejected without the façade having to care.

use thiserror::Error;

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// Configuration file was not valid JSON
    #[error("Configuration parse error: {0}")]
    ParseError(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{0}': {1}")]
    InvalidValue(String, String),
}
