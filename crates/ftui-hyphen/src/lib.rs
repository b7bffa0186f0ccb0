#![forbid(unsafe_code)]

//! Pattern-based word hyphenation for FrankenTUI.
//!
//! Compiles Hyphenator.js-style language dictionaries into a pattern trie
//! plus an exception table, and splits words at the positions Liang's
//! algorithm permits.
//!
//! ```rust
//! use ftui_hyphen::{Hyphenator, LanguageDictionary};
//!
//! let dict = LanguageDictionary::new(2, 2)
//!     .with_patterns(3, "n1n")
//!     .with_exceptions("ta\u{2027}ble");
//! let hyphenator = Hyphenator::new(&dict);
//!
//! assert_eq!(hyphenator.hyphenate("Banner"), vec!["Ban", "ner"]);
//! assert_eq!(hyphenator.hyphenate("table"), vec!["ta", "ble"]);
//! ```

pub mod dictionary;
pub mod error;
pub mod exceptions;
pub mod hyphenator;
pub mod registry;
pub mod trie;

pub use dictionary::LanguageDictionary;
pub use error::{HyphenError, Result};
pub use exceptions::{EXCEPTION_MARKER, ExceptionTable};
pub use hyphenator::{
    BOUNDARY, DEFAULT_MIN_WORD_LENGTH, HyphenBreakPoint, Hyphenator, SOFT_HYPHEN,
};
pub use registry::LanguageRegistry;
pub use trie::{Pattern, PatternTrie, parse_pattern};
