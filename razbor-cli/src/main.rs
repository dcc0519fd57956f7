//! razbor command-line entry point

use anyhow::Result;
use clap::Parser;
use razbor_cli::commands::Commands;

/// Rule-based word tokenization for Russian and English text
#[derive(Debug, Parser)]
#[command(name = "razbor", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_tokenize() {
        let cli = Cli::try_parse_from(["razbor", "tokenize", "-i", "a.txt", "-l", "russian"]).unwrap();
        assert!(matches!(cli.command, Commands::Tokenize(_)));
    }
}
