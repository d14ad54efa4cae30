//! Error types for lexicon loading
//!
//! Parsing a sentence never fails; these errors only arise when a lexicon
//! is read from disk or built from a user-supplied TOML document.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating a lexicon
#[derive(Error, Debug)]
pub enum Error {
    /// The lexicon file could not be read
    #[error("failed to read lexicon file {path}: {source}")]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The lexicon document is not valid TOML for the expected schema
    #[error("failed to parse lexicon: {0}")]
    Parse(#[from] toml::de::Error),

    /// The lexicon parsed but violates a content rule
    #[error("invalid lexicon: {0}")]
    Invalid(String),
}

/// Result type for lexicon operations
pub type Result<T> = std::result::Result<T, Error>;
