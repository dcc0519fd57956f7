//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use razbor_core::Token;
use std::io::Write;

/// Plain text formatter - one token per line, blank line between inputs
pub struct TextFormatter<W: Write> {
    writer: W,
    documents: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: 0,
        }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn begin_document(&mut self, _name: &str) -> Result<()> {
        if self.documents > 0 {
            writeln!(self.writer)?;
        }
        self.documents += 1;
        Ok(())
    }

    fn format_token(&mut self, token: &Token) -> Result<()> {
        writeln!(self.writer, "{}", token.text)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
