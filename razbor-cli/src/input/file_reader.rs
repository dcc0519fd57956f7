//! Text loading with UTF-8 validation

use super::InputSource;
use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Loaded text with the name it is reported under
#[derive(Debug, Clone)]
pub struct InputText {
    pub name: String,
    pub content: String,
}

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read all of standard input as UTF-8 text
    pub fn read_stdin() -> Result<String> {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read standard input")?;
        Ok(content)
    }

    pub fn read_source(source: &InputSource) -> Result<InputText> {
        let content = match source {
            InputSource::Stdin => Self::read_stdin()?,
            InputSource::File(path) => Self::read_text(path)?,
        };
        Ok(InputText {
            name: source.display_name(),
            content,
        })
    }
}
