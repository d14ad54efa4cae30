//! Tagged runs of words produced by the sentence parser

use crate::lexicon::classify::is_void_word;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Grammatical role of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Noun phrase
    Noun,
    /// Verb guessed from its suffix or from a following clause marker
    Verb,
    /// Adverb guessed from its suffix
    Adverb,
    /// Adjective guessed from its suffix
    Adjective,
}

impl SegmentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentKind::Noun => "noun",
            SegmentKind::Verb => "verb",
            SegmentKind::Adverb => "adverb",
            SegmentKind::Adjective => "adjective",
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// An ordered run of words sharing one grammatical role
///
/// The kind is fixed at creation. Blank words are never stored, so a
/// segment is empty only before its first word arrives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    kind: SegmentKind,
    words: SmallVec<[String; 4]>,
}

impl Segment {
    /// Create an empty segment
    pub fn new(kind: SegmentKind) -> Self {
        Self {
            kind,
            words: SmallVec::new(),
        }
    }

    /// Create a segment holding a single word (empty if the word is blank)
    pub fn with_word(kind: SegmentKind, word: impl Into<String>) -> Self {
        let mut segment = Self::new(kind);
        segment.push_word(word);
        segment
    }

    /// Empty noun phrase
    pub fn noun() -> Self {
        Self::new(SegmentKind::Noun)
    }

    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Append a word; blank words and a lone `0` are ignored
    pub fn push_word(&mut self, word: impl Into<String>) -> &mut Self {
        let word = word.into();
        if !is_void_word(&word) {
            self.words.push(word);
        }
        self
    }

    /// Remove and return the most recently added word
    pub fn pop_word(&mut self) -> Option<String> {
        self.words.pop()
    }

    /// Words joined by single spaces
    pub fn text(&self) -> String {
        self.words
            .iter()
            .filter(|word| !word.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_ignores_blank_words() {
        let mut segment = Segment::noun();
        segment.push_word("").push_word("   ").push_word("dog");
        assert_eq!(segment.words(), ["dog"]);
        assert_eq!(segment.len(), 1);
    }

    #[test]
    fn test_push_ignores_zero_but_keeps_unicode_spacing() {
        let mut segment = Segment::noun();
        segment.push_word("0").push_word(" 0").push_word("\u{a0}").push_word("dog");
        assert_eq!(segment.words(), ["\u{a0}", "dog"]);
    }

    #[test]
    fn test_with_blank_word_is_empty() {
        let segment = Segment::with_word(SegmentKind::Verb, "");
        assert!(segment.is_empty());
        assert_eq!(segment.kind(), SegmentKind::Verb);
    }

    #[test]
    fn test_text_joins_with_single_spaces() {
        let mut segment = Segment::noun();
        segment.push_word("small").push_word("black").push_word("dog");
        assert_eq!(segment.text(), "small black dog");
        assert_eq!(segment.to_string(), "small black dog");
        // stable across calls
        assert_eq!(segment.text(), segment.text());
    }

    #[test]
    fn test_pop_word() {
        let mut segment = Segment::noun();
        segment.push_word("dog").push_word("barks");
        assert_eq!(segment.pop_word().as_deref(), Some("barks"));
        assert_eq!(segment.text(), "dog");
        assert_eq!(segment.pop_word().as_deref(), Some("dog"));
        assert_eq!(segment.pop_word(), None);
        assert!(segment.is_empty());
    }

    #[test]
    fn test_clone_is_a_snapshot() {
        let mut open = Segment::noun();
        open.push_word("dog");
        let snapshot = open.clone();
        open.push_word("house");
        assert_eq!(snapshot.text(), "dog");
        assert_eq!(open.text(), "dog house");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(SegmentKind::Noun.to_string(), "noun");
        assert_eq!(SegmentKind::Adjective.as_str(), "adjective");
        assert_eq!(format!("{:<6}|", SegmentKind::Verb), "verb  |");
    }

    #[test]
    fn test_serialize_shape() {
        let segment = Segment::with_word(SegmentKind::Adverb, "quickly");
        let json = serde_json::to_value(&segment).unwrap();
        assert_eq!(json["kind"], "adverb");
        assert_eq!(json["words"][0], "quickly");
    }
}
