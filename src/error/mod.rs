//! Error module for the Morse tree application.
//!
//! Tree operations have their own error type in
//! [`crate::data_structures::MorseTreeError`]; this module wraps it together
//! with configuration and I/O failures for the application layers.

use thiserror::Error;

use crate::data_structures::MorseTreeError;

pub mod config;

/// Result type alias used by the application layers.
pub type MorseResult<T> = Result<T, MorseError>;

/// Core error enum for the application.
#[derive(Error, Debug)]
pub enum MorseError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors returned by the Morse tree.
    #[error("{0}")]
    Tree(#[from] MorseTreeError),

    /// IO errors that may occur during file or terminal operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML serialization errors.
    #[error("TOML serialization error: {0}")]
    Toml(#[from] toml::ser::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

impl MorseError {
    /// Process exit code for this error.
    ///
    /// Codec failures are user input problems and exit with 1; everything
    /// else is an environment problem and exits with 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Tree(_) => 1,
            _ => 2,
        }
    }
}
