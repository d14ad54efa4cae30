//! A parsed sentence and its segments

use crate::lexicon::classify::trim_spacing;
use crate::lexicon::Lexicon;
use crate::parser;
use crate::segment::{Segment, SegmentKind};

/// One sentence with its word list and finalized segments
///
/// Parsing happens on construction and never fails. Words are the trimmed,
/// ASCII-lowercased content split on single spaces, so runs of spaces
/// produce empty words; those never reach a segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    content: String,
    words: Vec<String>,
    segments: Vec<Segment>,
}

impl Sentence {
    /// Parse with the built-in English lexicon
    pub fn new(content: &str) -> Self {
        Self::with_lexicon(content, &Lexicon::english())
    }

    /// Parse with a specific lexicon
    pub fn with_lexicon(content: &str, lexicon: &Lexicon) -> Self {
        let content = trim_spacing(content).to_string();
        let words: Vec<String> = content
            .to_ascii_lowercase()
            .split(' ')
            .map(str::to_owned)
            .collect();
        let segments = parser::parse_words(&words, lexicon);

        log::debug!(
            "Parsed sentence of {} words into {} segments",
            words.len(),
            segments.len()
        );

        Self {
            content,
            words,
            segments,
        }
    }

    /// Trimmed original text
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    /// Noun phrases in sentence order
    pub fn nouns(&self) -> impl Iterator<Item = &Segment> {
        self.segments
            .iter()
            .filter(|segment| segment.kind() == SegmentKind::Noun)
    }

    /// Multi-line dump of the content followed by one tagged segment per line
    pub fn describe(&self) -> String {
        let mut out = format!("{:?}\n", self.content);
        for segment in &self.segments {
            out.push_str(&format!("  {:<9} {:?}\n", segment.kind(), segment.text()));
        }
        out
    }
}
