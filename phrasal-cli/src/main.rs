//! Command-line entry point for phrasal

use anyhow::Result;
use clap::Parser;
use phrasal_cli::commands::Commands;

/// Rule-based noun phrase extraction for English text
#[derive(Debug, Parser)]
#[command(name = "phrasal", version, about, long_about = None)]
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
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_subcommand_arguments() {
        let cli = Cli::try_parse_from(["phrasal", "parse", "the dog barked"]).unwrap();
        assert!(matches!(cli.command, Commands::Parse(_)));
    }

    #[test]
    fn test_extract_requires_input() {
        assert!(Cli::try_parse_from(["phrasal", "extract"]).is_err());
    }
}
