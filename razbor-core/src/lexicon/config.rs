//! TOML configuration for tokenizer lexicons
//!
//! ```toml
//! [metadata]
//! language = "mixed"
//!
//! [words]
//! ru = ["что-то", "во-первых"]
//! en = ["well-known"]
//!
//! [abbreviations]
//! ru = ["т.д", "г"]
//! en = ["e.g", "mr"]
//! builtin = true
//!
//! [contractions]
//! "dunno" = ["dun", "no"]
//! ```

use crate::error::{Result, TokenizerError};
use crate::lexicon::WordList;
use crate::postprocess::check_contraction;
use crate::tokenizer::Profile;
use crate::types::Lang;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Root tokenizer configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenizerConfig {
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub words: LanguageLists,
    #[serde(default)]
    pub abbreviations: Abbreviations,
    /// Extra contraction forms, lowercase form to its two parts
    #[serde(default)]
    pub contractions: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// Profile code: `ru`, `en` or `mixed`
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            language: default_language(),
            description: None,
        }
    }
}

/// Word lists keyed by language
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LanguageLists {
    #[serde(default)]
    pub ru: Vec<String>,
    #[serde(default)]
    pub en: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Abbreviations {
    #[serde(default)]
    pub ru: Vec<String>,
    #[serde(default)]
    pub en: Vec<String>,
    /// Keep the built-in abbreviation table alongside these lists
    #[serde(default = "default_true")]
    pub builtin: bool,
}

impl Default for Abbreviations {
    fn default() -> Self {
        Self {
            ru: Vec::new(),
            en: Vec::new(),
            builtin: true,
        }
    }
}

fn default_language() -> String {
    "mixed".to_string()
}

fn default_true() -> bool {
    true
}

impl TokenizerConfig {
    /// Load and validate a configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Loading tokenizer config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Profile named in `[metadata]`
    pub fn profile(&self) -> Result<Profile> {
        self.metadata.language.parse()
    }

    pub fn validate(&self) -> Result<()> {
        self.profile()?;

        for (section, lists) in [
            ("words", [&self.words.ru, &self.words.en]),
            ("abbreviations", [&self.abbreviations.ru, &self.abbreviations.en]),
        ] {
            for entry in lists.into_iter().flatten() {
                let trimmed = entry.trim();
                if trimmed.is_empty() {
                    return Err(TokenizerError::Configuration(format!(
                        "Empty entry in [{section}]"
                    )));
                }
                if trimmed.chars().any(char::is_whitespace) {
                    return Err(TokenizerError::Configuration(format!(
                        "Entry {entry:?} in [{section}] contains whitespace"
                    )));
                }
            }
        }

        for (form, parts) in &self.contractions {
            check_contraction(form, parts)?;
        }

        if self.words.ru.is_empty() && self.words.en.is_empty() {
            log::debug!("No word lists configured");
        }
        Ok(())
    }

    /// Configured words as a dictionary
    pub fn word_list(&self) -> WordList {
        WordList::new()
            .with_words(Lang::Ru, &self.words.ru)
            .with_words(Lang::En, &self.words.en)
    }

    /// Configured abbreviations as a dictionary, without the built-in table
    pub fn abbreviation_list(&self) -> WordList {
        WordList::new()
            .with_words(Lang::Ru, &self.abbreviations.ru)
            .with_words(Lang::En, &self.abbreviations.en)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::WordDictionary;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"
[metadata]
language = "ru"

[words]
ru = ["что-то", "Во-первых"]

[abbreviations]
ru = ["т.д."]
builtin = false

[contractions]
"dunno" = ["dun", "no"]
"#;

    #[test]
    fn test_parse_sample() {
        let config = TokenizerConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.profile().unwrap(), Profile::Russian);
        assert!(!config.abbreviations.builtin);
        assert!(config.word_list().is_word_known("во-первых", Lang::Ru));
        assert!(config.abbreviation_list().is_word_known("т.д", Lang::Ru));
        assert_eq!(config.contractions["dunno"], vec!["dun", "no"]);
    }

    #[test]
    fn test_defaults() {
        let config = TokenizerConfig::from_toml_str("").unwrap();
        assert_eq!(config.profile().unwrap(), Profile::Mixed);
        assert!(config.abbreviations.builtin);
        assert!(config.word_list().is_empty());
    }

    #[test]
    fn test_rejects_unknown_language() {
        let err = TokenizerConfig::from_toml_str("[metadata]\nlanguage = \"de\"\n").unwrap_err();
        assert!(matches!(err, TokenizerError::UnsupportedLanguage(_)));
    }

    #[test]
    fn test_rejects_whitespace_entries() {
        let err = TokenizerConfig::from_toml_str("[words]\nen = [\"two words\"]\n").unwrap_err();
        assert!(matches!(err, TokenizerError::Configuration(_)));
    }

    #[test]
    fn test_rejects_bad_contraction() {
        let err =
            TokenizerConfig::from_toml_str("[contractions]\n\"gimme\" = [\"gim\", \"mee\"]\n")
                .unwrap_err();
        assert!(matches!(err, TokenizerError::MalformedContraction { .. }));
    }

    #[test]
    fn test_invalid_toml() {
        let err = TokenizerConfig::from_toml_str("[words\n").unwrap_err();
        assert!(matches!(err, TokenizerError::Toml(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let config = TokenizerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.words.ru.len(), 2);

        let missing = TokenizerConfig::from_file("/nonexistent/razbor.toml").unwrap_err();
        assert!(matches!(missing, TokenizerError::Io(_)));
    }
}
