//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use razbor_core::Token;
use std::io::Write;

/// Markdown formatter - a heading per input and a numbered token list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    token_count: usize,
    documents: usize,
    document_tokens: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            token_count: 0,
            documents: 0,
            document_tokens: 0,
        }
    }
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn begin_document(&mut self, name: &str) -> Result<()> {
        if self.documents > 0 {
            writeln!(self.writer)?;
        }
        self.documents += 1;
        writeln!(self.writer, "## {name}")?;
        writeln!(self.writer)?;
        self.document_tokens = 0;
        Ok(())
    }

    fn format_token(&mut self, token: &Token) -> Result<()> {
        self.token_count += 1;
        self.document_tokens += 1;
        writeln!(
            self.writer,
            "{}. `{}` ({})",
            self.document_tokens, token.text, token.kind
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total tokens: {}*", self.token_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use razbor_core::tokenize;

    #[test]
    fn test_numbered_list() {
        let mut out = Vec::new();
        {
            let mut formatter = MarkdownFormatter::new(&mut out);
            formatter.begin_document("<stdin>").unwrap();
            for token in tokenize("т.е. 5") {
                formatter.format_token(&token).unwrap();
            }
            formatter.finish().unwrap();
        }
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("## <stdin>\n\n1. `т.е.` (RU)\n2. `5` (INT)\n"));
        assert!(text.ends_with("---\n*Total tokens: 2*\n"));
    }
}
