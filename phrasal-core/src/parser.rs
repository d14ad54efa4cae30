//! Single-pass segment parser
//!
//! Walks a sentence's words left to right with at most one open noun
//! phrase. Each word is classified into a [`Step`] by a fixed precedence:
//!
//! 1. quantifiers and numbers are skipped
//! 2. possessives are skipped
//! 3. a clause marker ("when", "if") re-reads the previous word as a verb
//! 4. `-ed`/`-ize` words become verbs
//! 5. `-ly` words become adverbs
//! 6. `-ing`/`-ional` words become adjectives and end the parse
//! 7. with an open phrase: conjunctions and function words close it,
//!    anything else extends it
//! 8. without one: function words open a phrase, the first word seeds
//!    one, anything else is dropped
//!
//! Verb, adverb and adjective segments are finalized in the step that
//! creates them; only noun phrases stay open across steps.

use crate::lexicon::{Lexicon, Token};
use crate::segment::{Segment, SegmentKind};

/// What the parser does with one word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// Quantifier or number; ignored
    SkipQuantifier,
    /// Word with an apostrophe; ignored
    SkipPossessive,
    /// Clause marker; the previous word becomes a verb
    ClauseBoundary,
    /// Suffix-guessed verb
    Verb,
    /// Suffix-guessed adverb
    Adverb,
    /// Suffix-guessed adjective; parsing stops
    Adjective,
    /// Conjunction inside an open phrase
    Conjunction,
    /// Function word or trailing comma inside an open phrase
    CloseOpen { comma: bool },
    /// Plain word inside an open phrase
    Extend,
    /// Function word or trailing comma with no open phrase
    OpenPhrase { seed: bool },
    /// First word of the sentence with no other classification
    SeedPhrase,
    /// Word outside any phrase
    Drop,
}

/// Whether the driving loop continues after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Parser state for one sentence
pub(crate) struct SentenceParser<'a> {
    words: &'a [String],
    lexicon: &'a Lexicon,
    open: Option<Segment>,
    segments: Vec<Segment>,
}

impl<'a> SentenceParser<'a> {
    pub(crate) fn new(words: &'a [String], lexicon: &'a Lexicon) -> Self {
        Self {
            words,
            lexicon,
            open: None,
            segments: Vec::new(),
        }
    }

    /// Run the state machine to completion and return finalized segments
    pub(crate) fn run(mut self) -> Vec<Segment> {
        let words = self.words;

        for (position, raw) in words.iter().enumerate() {
            let token = Token::new(raw);
            let step = self.classify(position, &token);
            log::trace!("word {position} {raw:?}: {step:?}");

            if self.apply(position, &token, step) == Flow::Stop {
                break;
            }
        }

        self.flush_open();
        self.segments
    }

    /// Pick the step for the word at `position`; first match wins
    pub(crate) fn classify(&self, position: usize, token: &Token<'_>) -> Step {
        let lexicon = self.lexicon;
        let word = token.bare();

        if lexicon.is_quantifier(word) {
            return Step::SkipQuantifier;
        }
        if token.is_possessive() {
            return Step::SkipPossessive;
        }
        if lexicon.is_clause_marker(word) {
            return Step::ClauseBoundary;
        }
        if token.is_guessed_verb() {
            return Step::Verb;
        }
        if token.is_guessed_adverb() {
            return Step::Adverb;
        }
        if token.is_guessed_adjective() {
            return Step::Adjective;
        }

        if self.open.is_some() {
            if lexicon.is_conjunction(word) {
                Step::Conjunction
            } else if lexicon.is_phrase_boundary(token) {
                Step::CloseOpen {
                    comma: token.has_trailing_comma(),
                }
            } else {
                Step::Extend
            }
        } else if lexicon.is_phrase_boundary(token) {
            Step::OpenPhrase {
                seed: position == 0 && token.has_trailing_comma(),
            }
        } else if position == 0 {
            Step::SeedPhrase
        } else {
            Step::Drop
        }
    }

    fn apply(&mut self, position: usize, token: &Token<'_>, step: Step) -> Flow {
        match step {
            Step::SkipQuantifier | Step::SkipPossessive | Step::Drop => {}
            Step::ClauseBoundary => self.clause_boundary(position),
            Step::Verb => self.emit_single(SegmentKind::Verb, token.bare()),
            Step::Adverb => self.emit_single(SegmentKind::Adverb, token.bare()),
            Step::Adjective => {
                self.finalize(Segment::with_word(SegmentKind::Adjective, token.bare()));
                // The open phrase is abandoned, not flushed.
                self.open = Some(Segment::noun());
                return Flow::Stop;
            }
            Step::Conjunction => self.restart_open(),
            Step::CloseOpen { comma } => {
                if comma {
                    if let Some(open) = self.open.as_mut() {
                        open.push_word(token.bare());
                    }
                }
                self.restart_open();
            }
            Step::Extend => {
                if let Some(open) = self.open.as_mut() {
                    open.push_word(token.bare());
                }
            }
            Step::OpenPhrase { seed } => {
                self.open = Some(if seed {
                    Segment::with_word(SegmentKind::Noun, token.bare())
                } else {
                    Segment::noun()
                });
            }
            Step::SeedPhrase => {
                self.open = Some(Segment::with_word(SegmentKind::Noun, token.bare()));
            }
        }

        Flow::Continue
    }

    /// Raw word before `position`, if any
    fn previous_word(&self, position: usize) -> Option<&'a str> {
        let words = self.words;
        position
            .checked_sub(1)
            .and_then(|index| words.get(index))
            .map(String::as_str)
    }

    /// Re-read the word before a clause marker as the preceding clause's verb
    ///
    /// The open phrase most likely swallowed that word, so its last word is
    /// popped before the phrase is flushed. Whatever word was added last is
    /// removed, even when it is not the previous word.
    fn clause_boundary(&mut self, position: usize) {
        let Some(previous) = self.previous_word(position) else {
            return;
        };
        if self.lexicon.is_preposition(previous) {
            return;
        }

        let verb = Segment::with_word(SegmentKind::Verb, previous);

        if let Some(open) = self.open.as_mut() {
            if !open.is_empty() {
                open.pop_word();
                self.restart_open();
            }
        }

        self.finalize(verb);
    }

    /// Flush the open phrase, emit a one-word segment, open a fresh phrase
    fn emit_single(&mut self, kind: SegmentKind, word: &str) {
        self.flush_open();
        self.finalize(Segment::with_word(kind, word));
        self.open = Some(Segment::noun());
    }

    /// Flush the open phrase and replace it with an empty one
    fn restart_open(&mut self) {
        if let Some(open) = self.open.replace(Segment::noun()) {
            self.finalize(open);
        }
    }

    fn flush_open(&mut self) {
        if let Some(open) = self.open.take() {
            self.finalize(open);
        }
    }

    fn finalize(&mut self, segment: Segment) {
        if !segment.is_empty() {
            self.segments.push(segment);
        }
    }
}

/// Parse a whitespace-split, lowercased word list into segments
pub(crate) fn parse_words(words: &[String], lexicon: &Lexicon) -> Vec<Segment> {
    SentenceParser::new(words, lexicon).run()
}
