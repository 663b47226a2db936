//! Search pattern compilation
//!
//! Turns the raw term plus the two match flags into a reusable predicate.
//! Whole-word mode escapes the term and bounds it with `\b` anchors; plain
//! mode hands the term to the regex engine as-is, so metacharacters stay
//! live (`a.c` matches "abc"). Case-insensitive mode lowercases the term at
//! compile time and every candidate at match time, rather than using an
//! engine flag, so both sides normalize identically.

use regex::Regex;

/// Error type for pattern compilation
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("Search term is empty")]
    EmptyTerm,

    #[error("Invalid search pattern: {0}")]
    InvalidRegex(#[from] regex::Error),
}

/// A compiled match predicate plus the case flag used to normalize
/// candidate text. Immutable; built once per search.
#[derive(Debug, Clone)]
pub struct SearchPattern {
    regex: Regex,
    case_sensitive: bool,
}

impl SearchPattern {
    /// Compile a term. The term is not trimmed: a whitespace-only term is a
    /// valid literal, but an empty one is rejected.
    pub fn compile(term: &str, case_sensitive: bool, whole_word: bool) -> Result<Self, PatternError> {
        if term.is_empty() {
            return Err(PatternError::EmptyTerm);
        }

        let mut term = term.to_string();
        if !case_sensitive {
            term = term.to_lowercase();
        }
        if whole_word {
            term = format!(r"\b{}\b", regex::escape(&term));
        }

        Ok(Self {
            regex: Regex::new(&term)?,
            case_sensitive,
        })
    }

    /// Unanchored test against one cell's text, applying the same case
    /// normalization the term received.
    pub fn matches(&self, text: &str) -> bool {
        if self.case_sensitive {
            self.regex.is_match(text)
        } else {
            self.regex.is_match(&text.to_lowercase())
        }
    }
}
