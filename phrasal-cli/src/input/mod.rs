//! Input handling module

use anyhow::Result;
use std::fmt;
use std::path::PathBuf;

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

/// Marker argument selecting standard input
pub const STDIN_MARKER: &str = "-";

/// Where a piece of input text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl InputSource {
    /// Read the whole source as UTF-8 text
    pub fn read_text(&self) -> Result<String> {
        match self {
            InputSource::Stdin => FileReader::read_stdin(),
            InputSource::File(path) => FileReader::read_text(path),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => f.write_str("<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Resolve command-line input arguments to sources
///
/// `-` selects standard input (at most once, listed first); every other
/// argument is a glob pattern.
pub fn resolve_inputs(arguments: &[String]) -> Result<Vec<InputSource>> {
    let read_stdin = arguments.iter().any(|arg| arg == STDIN_MARKER);
    let patterns: Vec<String> = arguments
        .iter()
        .filter(|arg| arg.as_str() != STDIN_MARKER)
        .cloned()
        .collect();

    let mut sources = Vec::new();
    if read_stdin {
        sources.push(InputSource::Stdin);
    }
    if !patterns.is_empty() {
        sources.extend(resolve_patterns(&patterns)?.into_iter().map(InputSource::File));
    }

    Ok(sources)
}
