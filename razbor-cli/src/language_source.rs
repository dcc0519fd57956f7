//! Where the tokenizer's profile and lexicons come from

use crate::commands::tokenize::Language;
use crate::error::CliError;
use razbor_core::{Profile, Tokenizer, TokenizerBuilder, TokenizerConfig};
use std::path::PathBuf;

/// Source of tokenizer settings
#[derive(Debug, Clone)]
pub enum LanguageSource {
    /// Built-in profile with the built-in abbreviation table
    BuiltIn(Language),
    /// Lexicon configuration file
    External {
        /// Path to the configuration file
        path: PathBuf,
        /// Profile overriding the file's `metadata.language`
        language: Option<Language>,
    },
}

impl LanguageSource {
    pub fn new(config: Option<PathBuf>, language: Option<Language>) -> Self {
        match config {
            Some(path) => LanguageSource::External { path, language },
            None => LanguageSource::BuiltIn(language.unwrap_or_default()),
        }
    }

    /// Get the display name for the language source
    pub fn display_name(&self) -> String {
        match self {
            LanguageSource::BuiltIn(lang) => format!("Built-in: {}", lang.as_str()),
            LanguageSource::External { path, language } => match language {
                Some(lang) => format!("External: {} (profile: {})", path.display(), lang.code()),
                None => format!("External: {}", path.display()),
            },
        }
    }

    /// Assemble the tokenizer this source describes
    pub fn build(&self, threads: Option<usize>) -> Result<Tokenizer, CliError> {
        let builder = match self {
            LanguageSource::BuiltIn(lang) => TokenizerBuilder::new().profile(lang.profile()),
            LanguageSource::External { path, language } => {
                let config = TokenizerConfig::from_file(path).map_err(|e| {
                    CliError::ConfigError(format!("{}: {e}", path.display()))
                })?;
                let builder = TokenizerBuilder::from_config(&config)?;
                match language {
                    Some(lang) => builder.profile(lang.profile()),
                    None => builder,
                }
            }
        };
        Ok(builder.threads(threads).build()?)
    }
}

impl Language {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        self.profile().name()
    }

    /// Get profile code
    pub fn code(&self) -> &'static str {
        self.profile().code()
    }

    pub fn profile(&self) -> Profile {
        match self {
            Language::Mixed => Profile::Mixed,
            Language::Russian => Profile::Russian,
            Language::English => Profile::English,
        }
    }
}
