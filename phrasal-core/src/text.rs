//! Paragraph and sentence splitting
//!
//! Cleanup is coarse: parenthesised asides and bracketed
//! citation marks are removed, straight and curly double quotes are dropped,
//! and every period ends a sentence (abbreviations included).

use regex::Regex;
use std::sync::OnceLock;

static BRACKETED: OnceLock<Regex> = OnceLock::new();

fn bracketed() -> &'static Regex {
    BRACKETED.get_or_init(|| Regex::new(r"\[[^\]]*\]").expect("bracket pattern is valid"))
}

/// Split text into paragraphs on blank lines
///
/// Lines inside a paragraph are trimmed and joined with single spaces.
pub fn paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join(" "));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }

    if !current.is_empty() {
        paragraphs.push(current.join(" "));
    }

    paragraphs
}

/// Split a paragraph into candidate sentences
///
/// Pieces are returned untrimmed and may be empty or blank.
pub fn sentences(paragraph: &str) -> Vec<String> {
    let cleaned = strip_parenthesized(paragraph);
    let cleaned = bracketed().replace_all(&cleaned, "");
    let cleaned: String = cleaned
        .chars()
        .filter(|c| !matches!(c, '"' | '\u{201C}' | '\u{201D}'))
        .collect();

    cleaned.split('.').map(str::to_owned).collect()
}

/// Remove balanced parenthesised spans, nested ones included
///
/// A `(` without a matching `)` is kept as a literal character and
/// scanning resumes right after it.
pub fn strip_parenthesized(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut copied_to = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'(' {
            if let Some(close) = matching_close(bytes, i) {
                out.push_str(&text[copied_to..i]);
                i = close + 1;
                copied_to = i;
                continue;
            }
        }
        i += 1;
    }

    out.push_str(&text[copied_to..]);
    out
}

fn matching_close(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, byte) in bytes[open..].iter().enumerate() {
        match byte {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + offset);
                }
            }
            _ => {}
        }
    }
    None
}
