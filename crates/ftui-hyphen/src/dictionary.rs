//! Language dictionaries in the Hyphenator.js pattern format.
//!
//! A dictionary groups its patterns by encoded length: every pattern of the
//! group `3` occupies exactly three chars (letters and weight digits), and all
//! of them are concatenated into one string.
//!
//! ```rust
//! use ftui_hyphen::LanguageDictionary;
//!
//! let dict = LanguageDictionary::from_json(
//!     r#"{"id": "xx", "leftmin": 2, "rightmin": 2, "patterns": {"3": "n1n"}}"#,
//! )
//! .unwrap();
//! assert_eq!(dict.left_min, 2);
//! assert_eq!(dict.patterns[&3], "n1n");
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::Result;

/// An immutable language pattern set plus margin rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LanguageDictionary {
    /// Chunk length → concatenated patterns of that encoded length.
    pub patterns: BTreeMap<usize, String>,
    /// Minimum number of chars before the first break.
    #[serde(rename = "leftmin")]
    pub left_min: usize,
    /// Minimum number of chars after the last break.
    #[serde(rename = "rightmin")]
    pub right_min: usize,
    /// Words with `‧` at every allowed break, separated by `", "`.
    #[serde(default)]
    pub exceptions: Option<String>,
}

impl LanguageDictionary {
    /// Create a dictionary with no patterns and no exceptions.
    #[must_use]
    pub fn new(left_min: usize, right_min: usize) -> Self {
        Self {
            patterns: BTreeMap::new(),
            left_min,
            right_min,
            exceptions: None,
        }
    }

    /// Add (or replace) the concatenated pattern group for `chunk_len`.
    #[must_use]
    pub fn with_patterns(mut self, chunk_len: usize, patterns: impl Into<String>) -> Self {
        self.patterns.insert(chunk_len, patterns.into());
        self
    }

    #[must_use]
    pub fn with_exceptions(mut self, exceptions: impl Into<String>) -> Self {
        self.exceptions = Some(exceptions.into());
        self
    }

    /// Deserialize a Hyphenator.js language object.
    ///
    /// Pattern group keys are decimal strings (`"3"`); fields other than
    /// `patterns`, `leftmin`, `rightmin` and `exceptions` are ignored.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
