use super::config::LexiconConfig;
use super::Lexicon;
use crate::error::{Error, Result};
use std::sync::{Arc, OnceLock};

static ENGLISH_CONFIG: OnceLock<LexiconConfig> = OnceLock::new();
static ENGLISH: OnceLock<Arc<Lexicon>> = OnceLock::new();

const ENGLISH_TOML: &str = include_str!("../../configs/lexicon/english.toml");

fn load_embedded_config() -> Result<LexiconConfig> {
    let config: LexiconConfig = toml::from_str(ENGLISH_TOML)?;
    config.validate()?;

    if config.metadata.code != "en" {
        return Err(Error::Invalid(format!(
            "embedded lexicon code mismatch: expected en, got {}",
            config.metadata.code
        )));
    }

    Ok(config)
}

/// The parsed built-in English lexicon document
pub fn english_config() -> &'static LexiconConfig {
    ENGLISH_CONFIG
        .get_or_init(|| load_embedded_config().expect("Failed to load embedded English lexicon"))
}

/// Shared instance of the built-in English lexicon
pub fn english() -> Arc<Lexicon> {
    let lexicon = ENGLISH.get_or_init(|| {
        log::debug!("Loading built-in English lexicon");
        Arc::new(Lexicon::from_config(english_config()))
    });
    Arc::clone(lexicon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_loads() {
        let config = load_embedded_config().expect("embedded lexicon should parse");
        assert_eq!(config.metadata.code, "en");
        assert_eq!(config.metadata.name, "English");
        assert_eq!(config.words.quantifiers.len(), 16);
        assert_eq!(config.words.auxiliary_verbs.len(), 25);
        assert_eq!(config.words.prepositions.len(), 71);
        assert_eq!(config.words.determiners.len(), 30);
        assert_eq!(config.words.articles, vec!["a", "an", "the"]);
        assert_eq!(config.words.conjunctions, vec!["and", "or"]);
        assert_eq!(config.words.clause_markers, vec!["when", "if"]);
    }

    #[test]
    fn test_english_is_shared() {
        let first = english();
        let second = english();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
