//! Tokenize command implementation

use crate::error::CliError;
use crate::input::{resolve_inputs, FileReader, InputText};
use crate::language_source::LanguageSource;
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the tokenize command
#[derive(Debug, Args)]
pub struct TokenizeArgs {
    /// Input files or patterns (supports glob); `-` reads stdin
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Rule profile (default: mixed, or the config file's language)
    #[arg(short, long, value_enum)]
    pub language: Option<Language>,

    /// Lexicon configuration file (TOML)
    #[arg(short, long, value_name = "FILE", env = "RAZBOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Worker threads for tokenizing several inputs
    #[arg(short, long, value_name = "COUNT")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one token per line
    Text,
    /// JSON array of inputs with their tokens and offsets
    Json,
    /// Markdown formatted output
    Markdown,
}

/// Supported rule profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Language {
    /// Russian and English rules
    #[default]
    Mixed,
    /// Russian rules, contractions kept whole
    Russian,
    /// English rules
    English,
}

impl TokenizeArgs {
    /// Execute the tokenize command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::info!("Starting tokenization");
        log::debug!("Arguments: {:?}", self);

        let source = LanguageSource::new(self.config.clone(), self.language);
        log::info!("Language source: {}", source.display_name());
        let tokenizer = source.build(self.threads)?;

        let inputs = resolve_inputs(&self.input)?;
        let texts = inputs
            .iter()
            .map(FileReader::read_source)
            .collect::<Result<Vec<InputText>>>()?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(texts.len() as u64);

        let contents: Vec<&str> = texts.iter().map(|text| text.content.as_str()).collect();
        let batches = tokenizer
            .tokenize_batch_with(&contents, |index| progress.file_completed(&texts[index].name))
            .map_err(|e| CliError::TokenizeError(e.to_string()))?;
        progress.finish();

        let mut formatter = self.create_formatter()?;
        for (text, tokens) in texts.iter().zip(&batches) {
            formatter.begin_document(&text.name)?;
            for token in tokens {
                formatter.format_token(token)?;
            }
            log::debug!("{}: {} tokens", text.name, tokens.len());
        }
        formatter.finish()?;

        log::info!("Tokenized {} input(s)", texts.len());
        Ok(())
    }

    /// Formatter over the chosen output
    fn create_formatter(&self) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(BufWriter::new(io::stdout())),
        };

        Ok(match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // a logger may already be installed when called twice in one process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}
