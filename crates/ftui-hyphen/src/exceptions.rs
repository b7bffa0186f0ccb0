//! Whole-word hyphenation overrides.
//!
//! Each entry is written with `‧` (U+2027) at every allowed break, e.g.
//! `"ta‧ble"`. The table maps the lowercased, marker-free word to the char
//! offsets of those markers; splitting is plain slicing of the caller's word.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Break marker inside exception entries.
pub const EXCEPTION_MARKER: char = '\u{2027}';

/// Sorted char offsets into the lowercased word.
pub type BreakOffsets = SmallVec<[usize; 4]>;

/// Lookup table from lowercased words to their fixed break offsets.
#[derive(Debug, Clone, Default)]
pub struct ExceptionTable {
    entries: FxHashMap<String, BreakOffsets>,
}

impl ExceptionTable {
    /// Parse a `", "`-separated exception list.
    ///
    /// Empty entries are ignored. A later entry for the same word replaces an
    /// earlier one.
    #[must_use]
    pub fn parse(list: &str) -> Self {
        let mut entries = FxHashMap::default();
        for raw in list.split(',') {
            let entry = strip_one_leading_space(raw);
            if entry.is_empty() {
                continue;
            }
            let (word, offsets) = parse_entry(entry);
            if !word.is_empty() {
                entries.insert(word, offsets);
            }
        }
        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Offsets for an already-lowercased word.
    #[must_use]
    pub fn get(&self, lowercase_word: &str) -> Option<&[usize]> {
        self.entries.get(lowercase_word).map(|o| o.as_slice())
    }

    /// Break offsets for `word` in chars of `word` itself, or `None` when the
    /// word is not an exception.
    ///
    /// Offsets are stored against the lowercased form; they are mapped back
    /// through each original char's lowercase expansion so that words whose
    /// case mapping changes length still split where the entry says.
    #[must_use]
    pub fn breaks_for(&self, word: &str) -> Option<BreakOffsets> {
        let offsets = self.get(&word.to_lowercase())?;
        let mut mapped = BreakOffsets::new();
        let mut pending = offsets.iter().copied().peekable();
        let mut lowered = 0usize;
        for (idx, ch) in word.chars().enumerate() {
            while let Some(&off) = pending.peek() {
                if off > lowered {
                    break;
                }
                if off == lowered && idx > 0 && mapped.last() != Some(&idx) {
                    mapped.push(idx);
                }
                pending.next();
            }
            lowered += ch.to_lowercase().count();
        }
        Some(mapped)
    }
}

/// `/,\s?/`: drop at most one whitespace char after the comma.
fn strip_one_leading_space(entry: &str) -> &str {
    let mut chars = entry.chars();
    match chars.next() {
        Some(c) if c.is_whitespace() => chars.as_str(),
        _ => entry,
    }
}

/// Split `"as‧so‧ciate"` into `("associate", [2, 4])`.
///
/// Markers at either end and repeated markers would delimit empty fragments
/// and are dropped.
fn parse_entry(entry: &str) -> (String, BreakOffsets) {
    let mut stripped = String::with_capacity(entry.len());
    let mut markers: SmallVec<[usize; 4]> = SmallVec::new();
    for ch in entry.chars() {
        if ch == EXCEPTION_MARKER {
            markers.push(stripped.len());
        } else {
            stripped.push(ch);
        }
    }

    // Lowercase whole strings so the key matches `str::to_lowercase` on the
    // lookup side, final sigma included.
    let word = stripped.to_lowercase();
    let total = word.chars().count();
    let mut offsets = BreakOffsets::new();
    for byte_pos in markers {
        let count = stripped[..byte_pos].to_lowercase().chars().count();
        if count > 0 && count < total && offsets.last() != Some(&count) {
            offsets.push(count);
        }
    }

    (word, offsets)
}
