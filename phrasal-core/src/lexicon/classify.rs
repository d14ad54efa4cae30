//! Word-shape predicates that need no word list
//!
//! Suffix guesses, possessive and comma detection, and the numeric test used
//! by the quantifier rule.

use std::borrow::Cow;

/// A word at the parser cursor, in raw and comma-free form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    raw: &'a str,
    bare: Cow<'a, str>,
}

impl<'a> Token<'a> {
    /// Wrap a raw (already lowercased) word
    pub fn new(raw: &'a str) -> Self {
        let bare = if raw.contains(',') {
            Cow::Owned(raw.replace(',', ""))
        } else {
            Cow::Borrowed(raw)
        };
        Self { raw, bare }
    }

    /// The word exactly as it appeared in the sentence
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// The word with every comma removed
    pub fn bare(&self) -> &str {
        &self.bare
    }

    /// True when the raw word ends with a comma
    pub fn has_trailing_comma(&self) -> bool {
        self.raw.ends_with(',')
    }

    pub fn is_possessive(&self) -> bool {
        is_possessive(self.bare())
    }

    pub fn is_guessed_verb(&self) -> bool {
        is_guessed_verb(self.bare())
    }

    pub fn is_guessed_adverb(&self) -> bool {
        is_guessed_adverb(self.bare())
    }

    pub fn is_guessed_adjective(&self) -> bool {
        is_guessed_adjective(self.bare())
    }
}

/// Words carrying an apostrophe (`dog's`, `dogs'`, `it's`)
pub fn is_possessive(word: &str) -> bool {
    word.contains('\'')
}

/// `-ed` past forms (but not `-eed`/`-ied`) and `-ize` verbs
pub fn is_guessed_verb(word: &str) -> bool {
    (word.ends_with("ed") && !word.ends_with("eed") && !word.ends_with("ied"))
        || word.ends_with("ize")
}

pub fn is_guessed_adverb(word: &str) -> bool {
    word.ends_with("ly")
}

/// `-ional` words, and `-ing` words longer than five bytes
pub fn is_guessed_adjective(word: &str) -> bool {
    word.ends_with("ional") || (word.len() > 5 && word.ends_with("ing"))
}

/// Strip the ASCII spacing that sentence content is trimmed of
///
/// Only space, tab, newline, carriage return, NUL and vertical tab are
/// removed; no-break spaces and other Unicode spacing stay part of the word.
pub fn trim_spacing(word: &str) -> &str {
    word.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0B'))
}

/// Words a segment refuses to store: blank after trimming, or a lone `0`
pub fn is_void_word(word: &str) -> bool {
    matches!(trim_spacing(word), "" | "0")
}

/// Decimal number test
///
/// Accepts optional surrounding whitespace, an optional sign, digits with an
/// optional fraction (or a bare fraction such as `.5`), and an optional
/// exponent. Rejects hex, `inf` and `nan`.
pub fn is_numeric(word: &str) -> bool {
    let trimmed =
        word.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C'));
    let bytes = trimmed.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - int_start;

    let mut frac_digits = 0;
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        frac_digits = i - frac_start;
    }

    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        i += 1;
        if i < bytes.len() && matches!(bytes[i], b'+' | b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == bytes.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_strips_every_comma() {
        let token = Token::new("dogs,");
        assert_eq!(token.raw(), "dogs,");
        assert_eq!(token.bare(), "dogs");
        assert!(token.has_trailing_comma());

        let token = Token::new("1,000");
        assert_eq!(token.bare(), "1000");
        assert!(!token.has_trailing_comma());

        let token = Token::new("a,,");
        assert_eq!(token.bare(), "a");
        assert!(token.has_trailing_comma());
    }

    #[test]
    fn test_guessed_verb() {
        assert!(is_guessed_verb("barked"));
        assert!(is_guessed_verb("realize"));
        assert!(is_guessed_verb("ed"));
        assert!(!is_guessed_verb("freed"));
        assert!(!is_guessed_verb("carried"));
        assert!(!is_guessed_verb("bark"));
    }

    #[test]
    fn test_guessed_adverb() {
        assert!(is_guessed_adverb("quickly"));
        assert!(is_guessed_adverb("fly"));
        assert!(!is_guessed_adverb("quick"));
    }

    #[test]
    fn test_guessed_adjective() {
        assert!(is_guessed_adjective("national"));
        assert!(is_guessed_adjective("ional"));
        assert!(is_guessed_adjective("running"));
        // "-ing" needs more than five bytes
        assert!(!is_guessed_adjective("thing"));
        assert!(!is_guessed_adjective("king"));
        assert!(!is_guessed_adjective("rings"));
    }

    #[test]
    fn test_possessive() {
        assert!(is_possessive("dog's"));
        assert!(is_possessive("dogs'"));
        assert!(!is_possessive("dogs"));
    }

    #[test]
    fn test_numeric() {
        for word in ["1", "42", "-3", "+7", "1.5", ".5", "1.", "1e5", "2.5E-3", " 9", "9\t"] {
            assert!(is_numeric(word), "{word:?} should be numeric");
        }
        for word in ["", ".", "-", "e5", "1e", "0x1a", "inf", "nan", "12ab", "1.2.3", "1 2"] {
            assert!(!is_numeric(word), "{word:?} should not be numeric");
        }
    }

    #[test]
    fn test_trim_spacing_keeps_unicode_spaces() {
        assert_eq!(trim_spacing(" \t dog\r\n\0\x0B"), "dog");
        assert_eq!(trim_spacing("dog\u{a0}"), "dog\u{a0}");
        assert_eq!(trim_spacing("\u{2003}"), "\u{2003}");
    }

    #[test]
    fn test_void_words() {
        assert!(is_void_word(""));
        assert!(is_void_word(" \t"));
        assert!(is_void_word("0"));
        assert!(is_void_word(" 0 "));
        assert!(!is_void_word("00"));
        assert!(!is_void_word("0.0"));
        assert!(!is_void_word("\u{a0}"));
        assert!(!is_void_word("dog"));
    }
}
