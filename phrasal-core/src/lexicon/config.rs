use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    pub metadata: MetadataConfig,
    #[serde(default)]
    pub words: WordLists,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    pub code: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordLists {
    #[serde(default)]
    pub quantifiers: Vec<String>,
    #[serde(default)]
    pub auxiliary_verbs: Vec<String>,
    #[serde(default)]
    pub prepositions: Vec<String>,
    #[serde(default)]
    pub determiners: Vec<String>,
    #[serde(default)]
    pub articles: Vec<String>,
    #[serde(default)]
    pub conjunctions: Vec<String>,
    #[serde(default)]
    pub clause_markers: Vec<String>,
}

impl WordLists {
    /// All lists paired with their TOML key, in file order
    pub fn named(&self) -> [(&'static str, &[String]); 7] {
        [
            ("quantifiers", self.quantifiers.as_slice()),
            ("auxiliary_verbs", self.auxiliary_verbs.as_slice()),
            ("prepositions", self.prepositions.as_slice()),
            ("determiners", self.determiners.as_slice()),
            ("articles", self.articles.as_slice()),
            ("conjunctions", self.conjunctions.as_slice()),
            ("clause_markers", self.clause_markers.as_slice()),
        ]
    }
}

impl LexiconConfig {
    /// Check content rules that the schema alone cannot express
    pub fn validate(&self) -> Result<()> {
        if self.metadata.code.trim().is_empty() {
            return Err(Error::Invalid(
                "metadata.code must not be blank".to_string(),
            ));
        }

        for (key, entries) in self.words.named() {
            for entry in entries {
                if entry.trim().is_empty() {
                    return Err(Error::Invalid(format!(
                        "words.{key} contains a blank entry"
                    )));
                }
                if entry.contains(' ') {
                    return Err(Error::Invalid(format!(
                        "words.{key} entry '{entry}' must be a single word"
                    )));
                }
            }
        }

        Ok(())
    }
}
