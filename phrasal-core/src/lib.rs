//! Rule-based noun phrase extraction
//!
//! This crate tags the words of English sentences as noun phrases, verbs,
//! adverbs and adjectives using closed word lists and suffix heuristics, then
//! counts how often each noun phrase occurs. There is no statistical model:
//! every decision comes from a fixed, ordered set of rules, and the known
//! misclassifications of those rules are part of the behavior.
//!
//! # Architecture
//!
//! - **Lexicon**: closed word lists plus suffix and word-shape tests
//! - **Parser**: a single-pass state machine turning one sentence into an
//!   ordered list of [`Segment`]s
//! - **Text**: coarse paragraph and sentence splitting of plain text
//! - **Dictionary**: collects parsed sentences and counts noun phrases
//!
//! # Example
//!
//! ```rust
//! use phrasal_core::{parse, Dictionary, SegmentKind};
//!
//! let segments = parse("The dog barked");
//! assert_eq!(segments.len(), 2);
//! assert_eq!(segments[0].kind(), SegmentKind::Noun);
//! assert_eq!(segments[0].text(), "dog");
//! assert_eq!(segments[1].kind(), SegmentKind::Verb);
//!
//! let mut dictionary = Dictionary::new();
//! dictionary.add_text("The pug snored. The pug yawned.");
//! assert_eq!(dictionary.noun_occurrences()["pug"], 2);
//! ```

pub mod dictionary;
pub mod error;
pub mod lexicon;
mod parser;
pub mod segment;
pub mod sentence;
pub mod text;

pub use dictionary::{Dictionary, NounCount};
pub use error::{Error, Result};
pub use lexicon::{Lexicon, WordCategory};
pub use segment::{Segment, SegmentKind};
pub use sentence::Sentence;

/// Parse one sentence with the built-in English lexicon
///
/// Total over all inputs: empty or whitespace-only text yields no segments.
pub fn parse(sentence: &str) -> Vec<Segment> {
    Sentence::new(sentence).into_segments()
}

/// Parse one sentence with a specific lexicon
pub fn parse_with(sentence: &str, lexicon: &Lexicon) -> Vec<Segment> {
    Sentence::with_lexicon(sentence, lexicon).into_segments()
}
