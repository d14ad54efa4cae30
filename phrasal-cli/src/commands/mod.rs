//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use phrasal_core::{Lexicon, WordCategory};

pub mod extract;
pub mod generate_lexicon;
pub mod parse;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract and count noun phrases from text files
    Extract(extract::ExtractArgs),

    /// Show how a single sentence is segmented
    Parse(parse::ParseArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Generate a lexicon template file
    GenerateLexicon(generate_lexicon::GenerateLexiconArgs),

    /// Validate a lexicon file
    Validate(validate::ValidateArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List the built-in word lists
    Lexicon {
        /// Only list one category (e.g. "prepositions")
        #[arg(short, long, value_name = "NAME")]
        category: Option<String>,
    },

    /// List available output formats
    Formats,
}

/// Output formats for noun phrase tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `count<TAB>noun` line per noun phrase
    Text,
    /// JSON array of noun phrases with counts
    Json,
    /// Markdown table
    Markdown,
}

impl OutputFormat {
    /// Parse a format name from a configuration file
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            "markdown" | "md" => Some(OutputFormat::Markdown),
            _ => None,
        }
    }
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Extract(args) => args.execute(),
            Commands::Parse(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
            Commands::GenerateLexicon(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Print the requested listing to stdout
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Lexicon { category } => {
                let lexicon = Lexicon::english();
                let categories = match category {
                    Some(name) => vec![name.parse::<WordCategory>()?],
                    None => WordCategory::ALL.to_vec(),
                };

                println!("Lexicon: {} ({})", lexicon.name(), lexicon.code());
                for category in categories {
                    let words = lexicon.words(category);
                    println!();
                    println!("{} ({}):", category, words.len());
                    println!("  {}", words.join(", "));
                }
            }
            ListCommands::Formats => {
                println!("Available output formats:");
                println!("  text      - One count and noun phrase per line");
                println!("  json      - JSON array of {{\"noun\", \"count\"}} objects");
                println!("  markdown  - Markdown table with a total line");
            }
        }
        Ok(())
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A logger may already be installed when commands run inside tests.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
