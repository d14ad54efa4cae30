//! Noun phrase aggregation across many sentences

use crate::lexicon::Lexicon;
use crate::segment::Segment;
use crate::sentence::Sentence;
use crate::text;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// A noun phrase and the number of times it occurred
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NounCount {
    pub noun: String,
    pub count: usize,
}

/// Collection of parsed sentences with noun frequency queries
#[derive(Debug, Clone)]
pub struct Dictionary {
    lexicon: Arc<Lexicon>,
    sentences: Vec<Sentence>,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl Dictionary {
    /// Empty dictionary using the built-in English lexicon
    pub fn new() -> Self {
        Self::with_lexicon(Lexicon::english())
    }

    pub fn with_lexicon(lexicon: Arc<Lexicon>) -> Self {
        Self {
            lexicon,
            sentences: Vec::new(),
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Register a parsed sentence; sentences with empty content are ignored
    pub fn add_sentence(&mut self, sentence: Sentence) -> &mut Self {
        if !sentence.content().is_empty() {
            self.sentences.push(sentence);
        }
        self
    }

    /// Split a paragraph into sentences and parse each
    pub fn add_paragraph(&mut self, paragraph: &str) -> &mut Self {
        for piece in text::sentences(paragraph) {
            let sentence = Sentence::with_lexicon(&piece, &self.lexicon);
            self.add_sentence(sentence);
        }
        self
    }

    /// Split free text into paragraphs and add each
    pub fn add_text(&mut self, text: &str) -> &mut Self {
        let before = self.sentences.len();
        for paragraph in text::paragraphs(text) {
            self.add_paragraph(&paragraph);
        }
        log::debug!("Added {} sentences", self.sentences.len() - before);
        self
    }

    /// Same result as [`Dictionary::add_text`], parsing sentences on the
    /// rayon thread pool
    #[cfg(feature = "parallel")]
    pub fn add_text_parallel(&mut self, text: &str) -> &mut Self {
        use rayon::prelude::*;

        let pieces: Vec<String> = text::paragraphs(text)
            .iter()
            .flat_map(|paragraph| text::sentences(paragraph))
            .collect();

        let lexicon = Arc::clone(&self.lexicon);
        let parsed: Vec<Sentence> = pieces
            .par_iter()
            .map(|piece| Sentence::with_lexicon(piece, &lexicon))
            .collect();

        log::debug!("Parsed {} candidate sentences in parallel", parsed.len());
        for sentence in parsed {
            self.add_sentence(sentence);
        }
        self
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Every noun segment, in sentence order
    pub fn nouns(&self) -> Vec<&Segment> {
        self.sentences
            .iter()
            .flat_map(|sentence| sentence.nouns())
            .collect()
    }

    /// Occurrence count per noun phrase text
    pub fn noun_occurrences(&self) -> HashMap<String, usize> {
        let mut occurrences = HashMap::new();
        for noun in self.nouns() {
            *occurrences.entry(noun.text()).or_insert(0) += 1;
        }
        occurrences
    }

    /// Noun counts ordered by count (descending), then text (ascending)
    pub fn ranked(&self) -> Vec<NounCount> {
        let mut ranked: Vec<NounCount> = self
            .noun_occurrences()
            .into_iter()
            .map(|(noun, count)| NounCount { noun, count })
            .collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.noun.cmp(&b.noun)));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_across_sentences() {
        let mut dictionary = Dictionary::new();
        dictionary
            .add_sentence(Sentence::new("dog"))
            .add_sentence(Sentence::new("dog"));
        assert_eq!(dictionary.noun_occurrences().get("dog"), Some(&2));
    }

    #[test]
    fn test_empty_sentences_ignored() {
        let mut dictionary = Dictionary::new();
        dictionary
            .add_sentence(Sentence::new(""))
            .add_sentence(Sentence::new("   "));
        assert!(dictionary.sentences().is_empty());
        assert!(dictionary.noun_occurrences().is_empty());
    }

    #[test]
    fn test_add_paragraph() {
        let mut dictionary = Dictionary::new();
        dictionary.add_paragraph("The dog barked. The cat (a tabby) slept. ");
        assert_eq!(dictionary.sentences().len(), 2);
        let nouns: Vec<String> = dictionary.nouns().into_iter().map(Segment::text).collect();
        assert_eq!(nouns, vec!["dog", "cat"]);
    }

    #[test]
    fn test_ranked_order() {
        let mut dictionary = Dictionary::new();
        dictionary.add_text("The pug barked. The cat slept.\n\nThe pug snored. The pug yawned.");
        let ranked = dictionary.ranked();
        assert_eq!(
            ranked,
            vec![
                NounCount {
                    noun: "pug".to_string(),
                    count: 3
                },
                NounCount {
                    noun: "cat".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let text = "The pug is a dog. It has a wrinkled face.\n\n\
                    The breed was brought from China. Pugs snore when they sleep.";
        let mut sequential = Dictionary::new();
        sequential.add_text(text);
        let mut parallel = Dictionary::new();
        parallel.add_text_parallel(text);

        assert_eq!(sequential.sentences(), parallel.sentences());
        assert_eq!(sequential.ranked(), parallel.ranked());
    }
}
