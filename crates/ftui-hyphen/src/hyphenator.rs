//! Hyphenation engine using Liang's TeX algorithm.
//!
//! # Architecture
//!
//! ```text
//! LanguageDictionary → PatternTrie + ExceptionTable (compile once)
//! Word → exception? → fixed split
//!      → contains U+00AD? → returned whole
//!      → pad with '_' → slide every suffix through the trie
//!      → max weight at each gap → odd weight inside the margins = break
//! ```
//!
//! The engine is immutable after construction. Every call allocates its own
//! weight array, so a single `Hyphenator` can serve any number of threads.

use unicode_segmentation::UnicodeSegmentation;

use crate::dictionary::LanguageDictionary;
use crate::exceptions::ExceptionTable;
use crate::trie::PatternTrie;

/// Word-boundary char used by dictionary patterns.
pub const BOUNDARY: char = '_';

/// Discretionary (soft) hyphen. Words containing it are never split further.
pub const SOFT_HYPHEN: char = '\u{00AD}';
const SOFT_HYPHEN_STR: &str = "\u{00AD}";

/// Shortest word [`Hyphenator::hyphenate_text`] touches by default.
pub const DEFAULT_MIN_WORD_LENGTH: usize = 4;

/// A permitted break inside a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HyphenBreakPoint {
    /// Char offset within the word where the next fragment starts.
    /// For `"banner"` split as `ban|ner`, `offset = 3`.
    pub offset: usize,
    /// The weight that allowed the break (always odd). Exception breaks
    /// report 1.
    pub weight: u8,
}

/// Compiled hyphenation rules for one language.
#[derive(Debug, Clone)]
pub struct Hyphenator {
    trie: PatternTrie,
    exceptions: ExceptionTable,
    left_min: usize,
    right_min: usize,
}

impl Hyphenator {
    /// Compile a dictionary into a trie and exception table.
    #[must_use]
    pub fn new(dict: &LanguageDictionary) -> Self {
        let trie = PatternTrie::from_groups(&dict.patterns);
        let exceptions = dict
            .exceptions
            .as_deref()
            .map(ExceptionTable::parse)
            .unwrap_or_default();

        tracing::debug!(
            message = "hyphen.build",
            patterns = trie.pattern_count(),
            exceptions = exceptions.len(),
            left_min = dict.left_min,
            right_min = dict.right_min
        );

        Self {
            trie,
            exceptions,
            left_min: dict.left_min,
            right_min: dict.right_min,
        }
    }

    /// Override the dictionary's margins.
    #[must_use]
    pub fn with_margins(mut self, left: usize, right: usize) -> Self {
        self.left_min = left;
        self.right_min = right;
        self
    }

    #[must_use]
    pub fn left_min(&self) -> usize {
        self.left_min
    }

    #[must_use]
    pub fn right_min(&self) -> usize {
        self.right_min
    }

    #[must_use]
    pub fn pattern_count(&self) -> usize {
        self.trie.pattern_count()
    }

    #[must_use]
    pub fn exception_count(&self) -> usize {
        self.exceptions.len()
    }

    /// Split `word` into fragments at every permitted break.
    ///
    /// Concatenating the result always gives back `word`, case included.
    /// An empty word yields `[""]`.
    #[must_use]
    pub fn hyphenate(&self, word: &str) -> Vec<String> {
        let breaks = self.break_points(word);
        let mut fragments = Vec::with_capacity(breaks.len() + 1);
        let mut current = String::new();
        let mut next = breaks.iter().map(|bp| bp.offset).peekable();
        for (idx, ch) in word.chars().enumerate() {
            if next.next_if_eq(&idx).is_some() {
                fragments.push(std::mem::take(&mut current));
            }
            current.push(ch);
        }
        fragments.push(current);
        fragments
    }

    /// Find the permitted breaks in `word`, sorted by offset.
    ///
    /// Exceptions take precedence over patterns and ignore the margins. A
    /// word already containing a soft hyphen has no breaks.
    #[must_use]
    pub fn break_points(&self, word: &str) -> Vec<HyphenBreakPoint> {
        if let Some(offsets) = self.exceptions.breaks_for(word) {
            return offsets
                .into_iter()
                .map(|offset| HyphenBreakPoint { offset, weight: 1 })
                .collect();
        }

        if word.contains(SOFT_HYPHEN) {
            return Vec::new();
        }

        // "_word_": original char j sits at padded index j + 1. Chars are
        // folded one by one so positions stay aligned even when a full
        // lowercase mapping would expand (e.g. 'İ').
        let mut padded: Vec<char> = Vec::with_capacity(word.len() + 2);
        padded.push(BOUNDARY);
        padded.extend(word.chars().map(fold_case));
        padded.push(BOUNDARY);
        let len = padded.len();

        // One slot past the end: a pattern ending on the last char writes
        // its trailing weight there.
        let mut weights = vec![0u8; len + 1];
        for start in 0..len {
            self.trie.apply_at(&padded, start, &mut weights);
        }

        let first = self.left_min.max(1) + 1;
        let end = len.saturating_sub(self.right_min).min(len - 1);
        (first..end)
            .filter(|&i| weights[i] % 2 == 1)
            .map(|i| HyphenBreakPoint {
                offset: i - 1,
                weight: weights[i],
            })
            .collect()
    }

    /// Whether `word` has at least one permitted break.
    #[must_use]
    pub fn can_hyphenate(&self, word: &str) -> bool {
        !self.break_points(word).is_empty()
    }

    /// Insert soft hyphens into running text.
    ///
    /// Text is segmented at Unicode word boundaries; words of at least
    /// `min_length` chars containing a letter are hyphenated, everything
    /// else is copied through.
    #[must_use]
    pub fn hyphenate_text(&self, text: &str, min_length: usize) -> String {
        let mut out = String::with_capacity(text.len() + text.len() / 4);
        for segment in text.split_word_bounds() {
            let is_word = segment.chars().any(char::is_alphabetic);
            if is_word && segment.chars().count() >= min_length {
                out.push_str(&self.hyphenate(segment).join(SOFT_HYPHEN_STR));
            } else {
                out.push_str(segment);
            }
        }
        out
    }
}

/// First char of the lowercase mapping; keeps one char per input char.
fn fold_case(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
