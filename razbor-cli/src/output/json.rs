//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use razbor_core::Token;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - one entry per input holding its token array
pub struct JsonFormatter<W: Write> {
    writer: W,
    documents: Vec<DocumentData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentData {
    /// Input file name, or `<stdin>`
    pub source: String,
    /// Tokens with code-point offsets and kinds
    pub tokens: Vec<Token>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn begin_document(&mut self, name: &str) -> Result<()> {
        self.documents.push(DocumentData {
            source: name.to_string(),
            tokens: Vec::new(),
        });
        Ok(())
    }

    fn format_token(&mut self, token: &Token) -> Result<()> {
        match self.documents.last_mut() {
            Some(document) => document.tokens.push(token.clone()),
            None => anyhow::bail!("token written before any document was started"),
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
