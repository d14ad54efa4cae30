//! Extract command implementation

use crate::commands::{init_logging, OutputFormat};
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_inputs, FileReader, InputSource};
use crate::lexicon_source::LexiconSource;
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use phrasal_core::{Dictionary, NounCount};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the extract command
#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Input files or patterns (supports glob, `-` reads stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Lexicon file replacing the built-in English word lists
    #[arg(short, long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Drop noun phrases seen fewer times than this
    #[arg(long, value_name = "N")]
    pub min_count: Option<usize>,

    /// Keep only the N most frequent noun phrases
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Parse sentences in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads for parallel parsing (implies --parallel)
    #[arg(short = 't', long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Effective settings after merging flags over the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractSettings {
    pub format: OutputFormat,
    pub min_count: usize,
    pub top: Option<usize>,
    pub parallel: bool,
    pub pretty_json: bool,
}

impl ExtractArgs {
    /// Execute the extract command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting noun phrase extraction");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        let settings = self.settings(&config)?;
        log::debug!("Settings: {:?}", settings);

        if let Some(threads) = self.threads {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .with_context(|| format!("Failed to start {} worker threads", threads))?;
            log::info!("Using {} worker threads", threads);
        }

        let source = LexiconSource::from_option(self.lexicon.as_deref());
        log::info!("Lexicon: {}", source.display_name());
        let mut dictionary = Dictionary::with_lexicon(source.load()?);

        let inputs = resolve_inputs(&self.input)?;
        log::info!("Found {} input(s) to process", inputs.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_inputs(inputs.len() as u64);

        for input in &inputs {
            if let InputSource::File(path) = input {
                log::debug!("Reading {} ({} bytes)", path.display(), FileReader::file_size(path)?);
            }
            let text = input.read_text()?;
            if settings.parallel {
                dictionary.add_text_parallel(&text);
            } else {
                dictionary.add_text(&text);
            }
            progress.input_completed(&input.to_string());
        }
        progress.finish();

        log::info!("Parsed {} sentence(s)", dictionary.sentences().len());

        let nouns = select(dictionary.ranked(), settings.min_count, settings.top);
        let mut formatter = self.create_formatter(&settings)?;
        for entry in &nouns {
            formatter.format_noun(&entry.noun, entry.count)?;
        }
        formatter.finish()?;

        log::info!("Wrote {} noun phrase(s)", nouns.len());
        Ok(())
    }

    /// Merge command-line flags over configuration file values
    pub fn settings(&self, config: &CliConfig) -> Result<ExtractSettings> {
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_name(&config.output.default_format).ok_or_else(|| {
                CliError::ConfigError(format!(
                    "unknown output format '{}'",
                    config.output.default_format
                ))
            })?,
        };

        let configured_top = (config.extract.top > 0).then_some(config.extract.top);

        Ok(ExtractSettings {
            format,
            min_count: self.min_count.unwrap_or(config.extract.min_count),
            top: self.top.or(configured_top),
            parallel: self.parallel || self.threads.is_some() || config.extract.parallel,
            pretty_json: config.output.pretty_json,
        })
    }

    fn create_formatter(&self, settings: &ExtractSettings) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        Ok(match settings.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, settings.pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        })
    }
}

/// Apply the minimum count and the top-N cut to a ranked table
fn select(ranked: Vec<NounCount>, min_count: usize, top: Option<usize>) -> Vec<NounCount> {
    ranked
        .into_iter()
        .filter(|entry| entry.count >= min_count)
        .take(top.unwrap_or(usize::MAX))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(input: Vec<String>) -> ExtractArgs {
        ExtractArgs {
            input,
            output: None,
            format: None,
            lexicon: None,
            config: None,
            min_count: None,
            top: None,
            parallel: false,
            threads: None,
            quiet: true,
            verbose: 0,
        }
    }

    fn entry(noun: &str, count: usize) -> NounCount {
        NounCount {
            noun: noun.to_string(),
            count,
        }
    }

    #[test]
    fn test_settings_defaults() {
        let settings = args(vec![]).settings(&CliConfig::default()).unwrap();
        assert_eq!(
            settings,
            ExtractSettings {
                format: OutputFormat::Text,
                min_count: 1,
                top: None,
                parallel: false,
                pretty_json: true,
            }
        );
    }

    #[test]
    fn test_flags_override_config() {
        let config = CliConfig::from_toml_str(
            "[extract]\nmin_count = 4\ntop = 10\n[output]\ndefault_format = \"markdown\"\n",
        )
        .unwrap();

        let from_config = args(vec![]).settings(&config).unwrap();
        assert_eq!(from_config.format, OutputFormat::Markdown);
        assert_eq!(from_config.min_count, 4);
        assert_eq!(from_config.top, Some(10));

        let mut overridden = args(vec![]);
        overridden.format = Some(OutputFormat::Json);
        overridden.min_count = Some(1);
        overridden.top = Some(2);
        let settings = overridden.settings(&config).unwrap();
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.min_count, 1);
        assert_eq!(settings.top, Some(2));
    }

    #[test]
    fn test_threads_imply_parallel() {
        let mut extract = args(vec![]);
        extract.threads = Some(2);
        assert!(extract.settings(&CliConfig::default()).unwrap().parallel);
    }

    #[test]
    fn test_unknown_config_format() {
        let config = CliConfig::from_toml_str("[output]\ndefault_format = \"yaml\"\n").unwrap();
        let err = args(vec![]).settings(&config).unwrap_err();
        assert!(err.to_string().contains("yaml"));
    }

    #[test]
    fn test_select() {
        let ranked = vec![entry("pug", 3), entry("dog", 2), entry("china", 1)];
        assert_eq!(select(ranked.clone(), 2, None), ranked[..2].to_vec());
        assert_eq!(select(ranked.clone(), 1, Some(1)), vec![entry("pug", 3)]);
        assert!(select(ranked, 5, None).is_empty());
    }

    #[test]
    fn test_execute_writes_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("pug.txt");
        let output = temp_dir.path().join("nouns.json");
        fs::write(&input, "The pug snored. The pug yawned.").unwrap();

        let mut extract = args(vec![input.to_string_lossy().into_owned()]);
        extract.output = Some(output.clone());
        extract.format = Some(OutputFormat::Json);
        extract.execute().unwrap();

        let nouns: Vec<NounCount> =
            serde_json::from_str(&fs::read_to_string(output).unwrap()).unwrap();
        assert_eq!(nouns[0], entry("pug", 2));
    }
}
