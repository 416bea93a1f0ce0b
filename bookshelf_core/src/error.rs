//! Error types for the bookshelf_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for bookshelf_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// User input could not be parsed into the expected type
    #[error("Invalid {field}: '{input}'")]
    Parse { field: &'static str, input: String },
}

impl Error {
    /// Whether the menu can report this error and keep going
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }
}
