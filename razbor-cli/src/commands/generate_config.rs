//! Generate config command implementation

use super::tokenize::Language;
use anyhow::{Context, Result};
use clap::Args;
use razbor_core::lexicon::config::{Abbreviations, LanguageLists, Metadata};
use razbor_core::TokenizerConfig;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Profile written to `metadata.language`
    #[arg(short, long, value_enum, default_value = "mixed")]
    pub language: Language,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating lexicon configuration template...");
        println!("  Profile: {}", self.language.code());
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template()?;

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Add the dashed words and abbreviations your texts need");
        println!("2. Validate your configuration:");
        println!("   razbor validate -c {}", self.output.display());
        println!("3. Use it for tokenization:");
        println!("   razbor tokenize -i input.txt -c {}", self.output.display());

        Ok(())
    }

    /// Starter configuration with one example per section
    fn template_config(&self) -> TokenizerConfig {
        let profile = self.language.profile();
        let mut words = LanguageLists::default();
        let mut abbreviations = Abbreviations::default();
        let mut contractions = BTreeMap::new();

        if profile.has_russian() {
            words.ru = vec!["что-то".to_string(), "во-первых".to_string()];
            abbreviations.ru = vec!["пр.т".to_string()];
        }
        if profile.has_english() {
            words.en = vec!["well-known".to_string()];
            abbreviations.en = vec!["approx".to_string()];
            contractions.insert(
                "gonna".to_string(),
                vec!["gon".to_string(), "na".to_string()],
            );
        }

        TokenizerConfig {
            metadata: Metadata {
                language: profile.code().to_string(),
                description: Some(format!("{} lexicon", profile.name())),
            },
            words,
            abbreviations,
            contractions,
        }
    }

    /// Generate template configuration content
    fn generate_template(&self) -> Result<String> {
        let body = toml::to_string_pretty(&self.template_config())
            .context("Failed to serialize configuration template")?;
        Ok(format!(
            "# Lexicon configuration for razbor\n\
             #\n\
             # [words]          dashed words joined as one token (что-то, well-known)\n\
             # [abbreviations]  dotted abbreviations without the final dot (т.д, e.g)\n\
             # [contractions]   form = [head, tail], split after tokenization\n\n\
             {body}"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_template_round_trips_through_validation() {
        for language in [Language::Mixed, Language::Russian, Language::English] {
            let args = GenerateConfigArgs {
                language,
                output: PathBuf::from("unused.toml"),
            };
            let template = args.generate_template().unwrap();
            let config = TokenizerConfig::from_toml_str(&template).unwrap();
            assert_eq!(config.profile().unwrap(), language.profile());
        }
    }

    #[test]
    fn test_generate_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("lexicon.toml");
        let args = GenerateConfigArgs {
            language: Language::Russian,
            output: output.clone(),
        };
        args.execute().unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        assert!(content.contains("language = \"ru\""));
        assert!(content.contains("что-то"));
        assert!(!content.contains("gonna"));
    }
}
