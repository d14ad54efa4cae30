//! Closed word lists and word classification
//!
//! A [`Lexicon`] answers membership questions for the function-word
//! categories the parser relies on: quantifiers, auxiliary verbs,
//! prepositions, determiners, articles, conjunctions and clause markers.
//! The built-in English lists are embedded as TOML and loaded once; custom
//! lexicons follow the same schema and are validated on load.
//!
//! Suffix-based guesses (verb, adverb, adjective) and other word-shape tests
//! live in [`classify`] since they need no word list.

pub mod classify;
pub mod config;
pub(crate) mod loader;

pub use classify::Token;
pub use config::{LexiconConfig, MetadataConfig, WordLists};
pub use loader::english_config;

use crate::error::{Error, Result};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

/// Function-word categories held by a lexicon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordCategory {
    Quantifier,
    AuxiliaryVerb,
    Preposition,
    Determiner,
    Article,
    Conjunction,
    ClauseMarker,
}

impl WordCategory {
    /// Every category, in lexicon file order
    pub const ALL: [WordCategory; 7] = [
        WordCategory::Quantifier,
        WordCategory::AuxiliaryVerb,
        WordCategory::Preposition,
        WordCategory::Determiner,
        WordCategory::Article,
        WordCategory::Conjunction,
        WordCategory::ClauseMarker,
    ];

    /// Key of the matching list in a lexicon TOML file
    pub fn key(&self) -> &'static str {
        match self {
            WordCategory::Quantifier => "quantifiers",
            WordCategory::AuxiliaryVerb => "auxiliary_verbs",
            WordCategory::Preposition => "prepositions",
            WordCategory::Determiner => "determiners",
            WordCategory::Article => "articles",
            WordCategory::Conjunction => "conjunctions",
            WordCategory::ClauseMarker => "clause_markers",
        }
    }
}

impl fmt::Display for WordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for WordCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        WordCategory::ALL
            .into_iter()
            .find(|category| category.key() == s)
            .ok_or_else(|| Error::Invalid(format!("unknown word category '{s}'")))
    }
}

/// Lookup tables for one language's closed word lists
#[derive(Debug, Clone)]
pub struct Lexicon {
    code: String,
    name: String,
    quantifiers: HashSet<String>,
    auxiliary_verbs: HashSet<String>,
    prepositions: HashSet<String>,
    determiners: HashSet<String>,
    articles: HashSet<String>,
    conjunctions: HashSet<String>,
    clause_markers: HashSet<String>,
}

fn word_set(entries: &[String]) -> HashSet<String> {
    entries.iter().map(|entry| entry.trim().to_lowercase()).collect()
}

impl Lexicon {
    /// Shared built-in English lexicon
    pub fn english() -> Arc<Lexicon> {
        loader::english()
    }

    /// Build lookup tables from an already validated configuration
    pub fn from_config(config: &LexiconConfig) -> Self {
        let words = &config.words;
        Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            quantifiers: word_set(&words.quantifiers),
            auxiliary_verbs: word_set(&words.auxiliary_verbs),
            prepositions: word_set(&words.prepositions),
            determiners: word_set(&words.determiners),
            articles: word_set(&words.articles),
            conjunctions: word_set(&words.conjunctions),
            clause_markers: word_set(&words.clause_markers),
        }
    }

    /// Parse and validate a lexicon TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: LexiconConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(Self::from_config(&config))
    }

    /// Load and validate a lexicon TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let lexicon = Self::from_toml_str(&content)?;
        log::debug!(
            "Loaded lexicon '{}' from {}",
            lexicon.code,
            path.display()
        );
        Ok(lexicon)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn set(&self, category: WordCategory) -> &HashSet<String> {
        match category {
            WordCategory::Quantifier => &self.quantifiers,
            WordCategory::AuxiliaryVerb => &self.auxiliary_verbs,
            WordCategory::Preposition => &self.prepositions,
            WordCategory::Determiner => &self.determiners,
            WordCategory::Article => &self.articles,
            WordCategory::Conjunction => &self.conjunctions,
            WordCategory::ClauseMarker => &self.clause_markers,
        }
    }

    /// Exact membership test
    pub fn contains(&self, category: WordCategory, word: &str) -> bool {
        self.set(category).contains(word)
    }

    /// Sorted entries of one category
    pub fn words(&self, category: WordCategory) -> Vec<&str> {
        let mut words: Vec<&str> = self.set(category).iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }

    /// Numbers and quantity words
    pub fn is_quantifier(&self, word: &str) -> bool {
        self.contains(WordCategory::Quantifier, word) || classify::is_numeric(word)
    }

    pub fn is_auxiliary_verb(&self, word: &str) -> bool {
        self.contains(WordCategory::AuxiliaryVerb, word)
    }

    pub fn is_preposition(&self, word: &str) -> bool {
        self.is_preposition_except(word, &[])
    }

    /// Preposition test that treats the listed words as non-prepositions
    pub fn is_preposition_except(&self, word: &str, exceptions: &[&str]) -> bool {
        self.contains(WordCategory::Preposition, word) && !exceptions.contains(&word)
    }

    pub fn is_determiner(&self, word: &str) -> bool {
        self.contains(WordCategory::Determiner, word)
    }

    pub fn is_article(&self, word: &str) -> bool {
        self.contains(WordCategory::Article, word)
    }

    pub fn is_conjunction(&self, word: &str) -> bool {
        self.contains(WordCategory::Conjunction, word)
    }

    /// Words such as "when" and "if" that open a subordinate clause
    pub fn is_clause_marker(&self, word: &str) -> bool {
        self.contains(WordCategory::ClauseMarker, word)
    }

    /// True for words that close an open noun phrase
    ///
    /// Articles, auxiliary verbs, prepositions, determiners, or any word
    /// followed by a comma.
    pub fn is_phrase_boundary(&self, token: &Token<'_>) -> bool {
        let word = token.bare();
        self.is_article(word)
            || self.is_auxiliary_verb(word)
            || self.is_preposition(word)
            || self.is_determiner(word)
            || token.has_trailing_comma()
    }
}
