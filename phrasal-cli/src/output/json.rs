//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use phrasal_core::NounCount;
use std::io::Write;

/// JSON formatter - outputs noun phrases as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    nouns: Vec<NounCount>,
    pretty: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            nouns: Vec::new(),
            pretty,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_noun(&mut self, noun: &str, count: usize) -> Result<()> {
        self.nouns.push(NounCount {
            noun: noun.to_string(),
            count,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.nouns)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.nouns)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
