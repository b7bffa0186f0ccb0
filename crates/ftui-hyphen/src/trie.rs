//! Pattern trie compiled from a language dictionary.
//!
//! Hyphenator.js dictionaries store patterns in fixed-width groups; each
//! pattern interleaves the chars to match with weight digits, e.g. `"_ab1"`
//! matches `_ab` at the word start and puts weight 1 after `b`.
//!
//! ```text
//! {3: "n1nx1y"} → chunks "n1n", "x1y"
//! "n1n"          → chars ['n','n'], weights [0,1,0]
//! ```

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Weights of one pattern. Length = matched chars + 1.
pub type Weights = SmallVec<[u8; 8]>;

// ---------------------------------------------------------------------------
// Pattern parsing
// ---------------------------------------------------------------------------

/// One pattern split into the chars to match and the gap weights around them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    /// Every non-digit char, boundary `_` included, in order.
    pub chars: SmallVec<[char; 8]>,
    /// Weight before `chars[0]`, between each pair, and after the last char.
    /// Missing digits read as 0.
    pub weights: Weights,
}

/// Parse one encoded pattern such as `"1n2n1"` or `"_ab1"`.
///
/// A run of digits is read as a single decimal number (saturating at 255).
/// Any non-digit char, including `_` and `.`, is a char to match.
#[must_use]
pub fn parse_pattern(encoded: &str) -> Pattern {
    let mut chars = SmallVec::new();
    let mut weights: Weights = SmallVec::new();
    weights.push(0);

    for ch in encoded.chars() {
        if let Some(digit) = ch.to_digit(10) {
            if let Some(last) = weights.last_mut() {
                *last = last.saturating_mul(10).saturating_add(digit as u8);
            }
        } else {
            chars.push(ch);
            weights.push(0);
        }
    }

    debug_assert_eq!(weights.len(), chars.len() + 1);
    Pattern { chars, weights }
}

// ---------------------------------------------------------------------------
// Trie
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: FxHashMap<char, usize>,
    /// Present only when a pattern ends exactly at this node.
    weights: Option<Weights>,
}

/// Prefix tree over pattern chars. Nodes live in one arena; index 0 is the
/// root and children are referenced by arena index.
///
/// Read-only after [`PatternTrie::from_groups`], so one trie can be shared by
/// any number of threads.
#[derive(Debug, Clone)]
pub struct PatternTrie {
    nodes: Vec<TrieNode>,
    patterns: usize,
}

impl Default for PatternTrie {
    fn default() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            patterns: 0,
        }
    }
}

impl PatternTrie {
    /// Build a trie from chunk-length groups of concatenated patterns.
    ///
    /// A group whose length is not a multiple of its chunk length still has
    /// its short trailing chunk inserted, and a warning is logged. Groups keyed
    /// by 0 are skipped with a warning.
    #[must_use]
    pub fn from_groups(groups: &BTreeMap<usize, String>) -> Self {
        let mut trie = Self::default();
        for (&chunk_len, text) in groups {
            if chunk_len == 0 {
                tracing::warn!(message = "hyphen.trie.zero_chunk", len = text.len());
                continue;
            }
            let chars: Vec<char> = text.chars().collect();
            if chars.len() % chunk_len != 0 {
                tracing::warn!(
                    message = "hyphen.trie.ragged_group",
                    chunk_len,
                    group_len = chars.len(),
                    trailing = chars.len() % chunk_len
                );
            }
            for chunk in chars.chunks(chunk_len) {
                let encoded: String = chunk.iter().collect();
                trie.insert(&parse_pattern(&encoded));
            }
        }
        trie
    }

    /// Insert a single pattern. Re-inserting the same chars overwrites the
    /// previous weights.
    pub fn insert(&mut self, pattern: &Pattern) {
        let mut node_idx = 0;
        for &ch in &pattern.chars {
            node_idx = match self.nodes[node_idx].children.get(&ch) {
                Some(&idx) => idx,
                None => {
                    let idx = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[node_idx].children.insert(ch, idx);
                    idx
                }
            };
        }
        if self.nodes[node_idx]
            .weights
            .replace(pattern.weights.clone())
            .is_none()
        {
            self.patterns += 1;
        }
    }

    /// Number of distinct patterns stored.
    #[must_use]
    pub fn pattern_count(&self) -> usize {
        self.patterns
    }

    /// Weights stored for exactly `chars`, if a pattern ends there.
    #[cfg(test)]
    #[must_use]
    fn weights_for(&self, chars: &[char]) -> Option<&[u8]> {
        let mut node_idx = 0;
        for ch in chars {
            node_idx = *self.nodes[node_idx].children.get(ch)?;
        }
        self.nodes[node_idx].weights.as_deref()
    }

    /// Walk the trie with `word[start..]` and fold every matching pattern
    /// into `out` by elementwise maximum, pattern weight `k` landing on
    /// `out[start + k]`.
    ///
    /// Out-of-range `start` (past `word` or `out`) contributes nothing.
    pub(crate) fn apply_at(&self, word: &[char], start: usize, out: &mut [u8]) {
        if start > word.len() || start > out.len() {
            return;
        }
        let mut node_idx = 0;
        for &ch in &word[start..] {
            let Some(&next) = self.nodes[node_idx].children.get(&ch) else {
                break;
            };
            node_idx = next;
            if let Some(weights) = &self.nodes[node_idx].weights {
                for (slot, &w) in out[start..].iter_mut().zip(weights.iter()) {
                    *slot = (*slot).max(w);
                }
            }
        }
    }
}
