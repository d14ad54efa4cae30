//! Lexicon source management for the CLI

use crate::error::CliError;
use anyhow::Result;
use phrasal_core::Lexicon;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Source of the closed word lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconSource {
    /// The embedded English lexicon
    BuiltIn,
    /// External lexicon TOML file
    External(PathBuf),
}

impl LexiconSource {
    /// Pick the external file when one was given, else the built-in lexicon
    pub fn from_option(path: Option<&Path>) -> Self {
        match path {
            Some(path) => LexiconSource::External(path.to_path_buf()),
            None => LexiconSource::BuiltIn,
        }
    }

    /// Load the lexicon
    pub fn load(&self) -> Result<Arc<Lexicon>> {
        match self {
            LexiconSource::BuiltIn => Ok(Lexicon::english()),
            LexiconSource::External(path) => {
                let lexicon = Lexicon::from_file(path)
                    .map_err(|e| CliError::LexiconError(format!("{}: {e}", path.display())))?;
                log::info!(
                    "Loaded lexicon '{}' ({}) from {}",
                    lexicon.name(),
                    lexicon.code(),
                    path.display()
                );
                Ok(Arc::new(lexicon))
            }
        }
    }

    /// Get the display name for the lexicon source
    pub fn display_name(&self) -> String {
        match self {
            LexiconSource::BuiltIn => "Built-in: English".to_string(),
            LexiconSource::External(path) => format!("External: {}", path.display()),
        }
    }
}
