//! Output formatting module

use anyhow::Result;
use razbor_core::Token;

/// Trait for output formatters
///
/// Called once per input text with `begin_document`, then once per token,
/// then `finish` after the last text.
pub trait OutputFormatter {
    /// Start the tokens of one input
    fn begin_document(&mut self, name: &str) -> Result<()>;

    /// Format and output a single token
    fn format_token(&mut self, token: &Token) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
