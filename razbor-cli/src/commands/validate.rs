//! Validate command implementation

use anyhow::Result;
use clap::Args;
use razbor_core::{TokenizerBuilder, TokenizerConfig};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to lexicon configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating lexicon configuration: {}", self.config.display());

        // Try to load the configuration and build a tokenizer from it
        let loaded = TokenizerConfig::from_file(&self.config).and_then(|config| {
            TokenizerBuilder::from_config(&config)?.build()?;
            Ok(config)
        });

        match loaded {
            Ok(config) => {
                let profile = config.profile()?;
                println!("✓ Configuration is valid!");
                println!("  Profile: {} ({})", profile.name(), profile.code());
                println!(
                    "  Words: {} ru, {} en",
                    config.words.ru.len(),
                    config.words.en.len()
                );
                println!(
                    "  Abbreviations: {} ru, {} en (built-in table: {})",
                    config.abbreviations.ru.len(),
                    config.abbreviations.en.len(),
                    if config.abbreviations.builtin { "on" } else { "off" }
                );
                println!("  Contractions: {}", config.contractions.len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", content).unwrap();
        temp_file
    }

    #[test]
    fn test_validate_valid_config() {
        let temp_file = config_file(
            r#"
[metadata]
language = "ru"

[words]
ru = ["что-то"]

[contractions]
"dunno" = ["dun", "no"]
"#,
        );
        let args = ValidateArgs {
            config: temp_file.path().to_path_buf(),
        };
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_unknown_language() {
        let temp_file = config_file("[metadata]\nlanguage = \"de\"\n");
        let args = ValidateArgs {
            config: temp_file.path().to_path_buf(),
        };
        let error = args.execute().unwrap_err();
        assert!(error.to_string().contains("Unsupported language: de"));
    }

    #[test]
    fn test_validate_malformed_contraction() {
        let temp_file = config_file("[contractions]\n\"gonna\" = [\"go\", \"na\"]\n");
        let args = ValidateArgs {
            config: temp_file.path().to_path_buf(),
        };
        assert!(args.execute().is_err());
    }
}
