//! Error types for tokenizer construction and configuration
//!
//! Tokenization itself never fails; everything here surfaces while a
//! [`Tokenizer`](crate::Tokenizer) is being assembled.

use thiserror::Error;

/// Error type for tokenizer construction
#[derive(Debug, Error)]
pub enum TokenizerError {
    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Unknown language profile code
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Contraction table entry that cannot be split in two
    #[error("Malformed contraction {form:?}: {reason}")]
    MalformedContraction { form: String, reason: String },

    /// Reading a configuration file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid TOML for the schema
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for tokenizer construction
pub type Result<T> = std::result::Result<T, TokenizerError>;
