//! Keyword tokenization: lowercase alphanumeric tokens as an unordered set

use crate::error::{Result, ResumeMatcherError};
use regex::Regex;
use std::collections::HashSet;

/// Unordered, duplicate-free set of `[a-z0-9]+` tokens.
pub type TokenSet = HashSet<String>;

/// Characters removed before splitting. The information separators
/// `\x1C`-`\x1F` count as whitespace so they split tokens instead of
/// being deleted.
const STRIP_PATTERN: &str = r"[^a-z0-9\s\x1C-\x1F]";

pub struct KeywordTokenizer {
    strip_regex: Regex,
}

impl KeywordTokenizer {
    pub fn new() -> Result<Self> {
        let strip_regex = Regex::new(STRIP_PATTERN)
            .map_err(|e| ResumeMatcherError::TextProcessing(format!("Invalid strip pattern: {}", e)))?;
        Ok(Self { strip_regex })
    }

    /// Lowercase, delete every character that is not an ASCII letter, digit
    /// or whitespace, then split on whitespace runs.
    ///
    /// Deletion joins neighbours: `"ci/cd"` becomes `"cicd"` and `"C++"`
    /// becomes `"c"`.
    pub fn tokenize(&self, text: &str) -> TokenSet {
        let lowered = text.to_lowercase();
        let stripped = self.strip_regex.replace_all(&lowered, "");

        stripped
            .split(is_separator)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect()
    }
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c)
}
