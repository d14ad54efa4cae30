//! Generate lexicon command implementation

use anyhow::{Context, Result};
use clap::Args;
use phrasal_core::lexicon::english_config;
use std::path::PathBuf;

/// Arguments for the generate-lexicon command
#[derive(Debug, Args)]
pub struct GenerateLexiconArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Code recorded in the lexicon metadata
    #[arg(long, value_name = "CODE", default_value = "custom")]
    pub code: String,
}

impl GenerateLexiconArgs {
    /// Execute the generate-lexicon command
    pub fn execute(&self) -> Result<()> {
        println!("Generating lexicon template...");
        println!("  Lexicon code: {}", self.code);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template()?;
        std::fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Lexicon template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the word lists");
        println!("2. Validate your lexicon:");
        println!("   phrasal validate --lexicon {}", self.output.display());
        println!("3. Use it for extraction:");
        println!(
            "   phrasal extract -i input.txt --lexicon {}",
            self.output.display()
        );

        Ok(())
    }

    /// The built-in English lists under the requested code
    fn generate_template(&self) -> Result<String> {
        let mut config = english_config().clone();
        config.metadata.code = self.code.clone();
        config.metadata.name = format!("{} (based on English)", self.code);

        let body = toml::to_string_pretty(&config).context("Failed to serialize lexicon")?;
        Ok(format!(
            "# Lexicon for phrasal\n\
             #\n\
             # Every list is optional; a missing list is treated as empty.\n\
             # Entries are single lowercase words.\n\n{body}"
        ))
    }
}
