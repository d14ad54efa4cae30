//! Parse command implementation

use crate::lexicon_source::LexiconSource;
use anyhow::Result;
use clap::Args;
use phrasal_core::{SegmentKind, Sentence};
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the parse command
#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Sentence to segment
    #[arg(value_name = "SENTENCE")]
    pub sentence: String,

    /// Lexicon file replacing the built-in English word lists
    #[arg(short, long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ParseFormat,
}

/// Output formats for a single parsed sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ParseFormat {
    /// Content line followed by one tagged segment per line
    Text,
    /// JSON object with the content and its segments
    Json,
}

#[derive(Debug, Serialize)]
struct ParsedSentence<'a> {
    sentence: &'a str,
    segments: Vec<ParsedSegment>,
}

#[derive(Debug, Serialize)]
struct ParsedSegment {
    kind: SegmentKind,
    text: String,
}

impl ParseArgs {
    /// Execute the parse command
    pub fn execute(&self) -> Result<()> {
        print!("{}", self.render()?);
        Ok(())
    }

    /// Parse the sentence and render it in the selected format
    pub fn render(&self) -> Result<String> {
        let lexicon = LexiconSource::from_option(self.lexicon.as_deref()).load()?;
        let sentence = Sentence::with_lexicon(&self.sentence, &lexicon);

        Ok(match self.format {
            ParseFormat::Text => sentence.describe(),
            ParseFormat::Json => {
                let parsed = ParsedSentence {
                    sentence: sentence.content(),
                    segments: sentence
                        .segments()
                        .iter()
                        .map(|segment| ParsedSegment {
                            kind: segment.kind(),
                            text: segment.text(),
                        })
                        .collect(),
                };
                let mut json = serde_json::to_string_pretty(&parsed)?;
                json.push('\n');
                json
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn args(sentence: &str, format: ParseFormat) -> ParseArgs {
        ParseArgs {
            sentence: sentence.to_string(),
            lexicon: None,
            format,
        }
    }

    #[test]
    fn test_render_text() {
        let output = args("The dog barked", ParseFormat::Text).render().unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "\"The dog barked\"");
        assert!(lines[1].contains("noun") && lines[1].contains("\"dog\""));
        assert!(lines[2].contains("verb") && lines[2].contains("\"barked\""));
    }

    #[test]
    fn test_render_json() {
        let output = args("The dog barked", ParseFormat::Json).render().unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["sentence"], "The dog barked");
        assert_eq!(value["segments"][0]["kind"], "noun");
        assert_eq!(value["segments"][0]["text"], "dog");
        assert_eq!(value["segments"][1]["kind"], "verb");
    }

    #[test]
    fn test_render_empty_sentence() {
        let output = args("", ParseFormat::Json).render().unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["segments"].as_array().map(Vec::len), Some(0));
    }
}
