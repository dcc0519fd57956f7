//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod generate_config;
pub mod tokenize;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text files into word tokens
    Tokenize(tokenize::TokenizeArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate a lexicon configuration file
    Validate(validate::ValidateArgs),

    /// Write a starter lexicon configuration file
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available rule profiles
    Languages,

    /// List available output formats
    Formats,
}

impl Commands {
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Tokenize(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    fn render(&self) -> String {
        use clap::ValueEnum;

        let mut out = String::new();
        match self {
            ListCommands::Languages => {
                out.push_str("Available languages:\n");
                for language in tokenize::Language::value_variants() {
                    let profile = language.profile();
                    let name = language
                        .to_possible_value()
                        .map(|value| value.get_name().to_string())
                        .unwrap_or_default();
                    out.push_str(&format!(
                        "  {:<8} {:<6} {} rules, contractions {}\n",
                        name,
                        profile.code(),
                        profile.name(),
                        if profile.splits_contractions() { "split" } else { "kept" }
                    ));
                }
            }
            ListCommands::Formats => {
                out.push_str("Available formats:\n");
                out.push_str("  text      One token per line\n");
                out.push_str("  json      Tokens with offsets and kinds\n");
                out.push_str("  markdown  Numbered token list per input\n");
            }
        }
        out
    }
}
