//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs noun phrases as a table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    noun_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            noun_count: 0,
        }
    }

    fn write_header(&mut self) -> Result<()> {
        writeln!(self.writer, "| Count | Noun phrase |")?;
        writeln!(self.writer, "|------:|-------------|")?;
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_noun(&mut self, noun: &str, count: usize) -> Result<()> {
        if self.noun_count == 0 {
            self.write_header()?;
        }
        self.noun_count += 1;
        writeln!(self.writer, "| {} | {} |", count, noun.replace('|', "\\|"))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.noun_count == 0 {
            self.write_header()?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total noun phrases: {}*", self.noun_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_table() {
        let mut buffer = Vec::new();
        {
            let mut formatter = MarkdownFormatter::new(&mut buffer);
            formatter.format_noun("pug", 2).unwrap();
            formatter.format_noun("a|b", 1).unwrap();
            formatter.finish().unwrap();
        }
        let output = String::from_utf8(buffer).unwrap();
        assert!(output.starts_with("| Count | Noun phrase |\n"));
        assert!(output.contains("| 2 | pug |\n"));
        assert!(output.contains("| 1 | a\\|b |\n"));
        assert!(output.ends_with("*Total noun phrases: 2*\n"));
    }

    #[test]
    fn test_empty_table_still_has_header() {
        let mut buffer = Vec::new();
        {
            let mut formatter = MarkdownFormatter::new(&mut buffer);
            formatter.finish().unwrap();
        }
        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("| Count | Noun phrase |"));
        assert!(output.contains("*Total noun phrases: 0*"));
    }
}
