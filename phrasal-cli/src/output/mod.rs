//! Output formatting module

use anyhow::Result;

/// Trait for noun table formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output one ranked noun phrase
    fn format_noun(&mut self, noun: &str, count: usize) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
