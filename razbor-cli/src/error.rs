//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Stdin mixed with file inputs
    InvalidInput(String),
    /// Lexicon configuration or tokenizer options rejected
    ConfigError(String),
    /// Tokenization failure reported by the core
    TokenizeError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::TokenizeError(msg) => write!(f, "Tokenization error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<razbor_core::TokenizerError> for CliError {
    fn from(error: razbor_core::TokenizerError) -> Self {
        use razbor_core::TokenizerError;
        match error {
            TokenizerError::Io(e) => CliError::FileNotFound(e.to_string()),
            TokenizerError::Configuration(msg) => CliError::ConfigError(msg),
            other => CliError::ConfigError(other.to_string()),
        }
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
