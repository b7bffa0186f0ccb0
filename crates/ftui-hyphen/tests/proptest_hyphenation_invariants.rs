//! Property-based invariant tests for the hyphenation engine.
//!
//! 1. Fragments concatenate back to the input, case included.
//! 2. No fragment is empty unless the input is.
//! 3. Pattern breaks stay inside the left/right margins.
//! 4. Exception words always get their fixed split.
//! 5. Words with a soft hyphen come back whole.
//! 6. Repeated calls agree.
//! 7. `hyphenate_text` only ever inserts soft hyphens.
//! 8. No panics on arbitrary strings.

use ftui_hyphen::{Hyphenator, LanguageDictionary, SOFT_HYPHEN};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

const EN_MINI: &str = include_str!("fixtures/en-mini.json");

fn en_mini() -> Hyphenator {
    Hyphenator::new(&LanguageDictionary::from_json(EN_MINI).unwrap())
}

/// Odd weight before every letter, so only the margins limit breaks.
fn every_gap(left: usize, right: usize) -> Hyphenator {
    let mut patterns = String::new();
    for c in 'a'..='z' {
        patterns.push('1');
        patterns.push(c);
    }
    Hyphenator::new(&LanguageDictionary::new(left, right).with_patterns(2, patterns))
}

fn word() -> impl Strategy<Value = String> {
    "[a-zA-Z]{0,20}"
}

// ═════════════════════════════════════════════════════════════════════════
// 1-2. Round trip and non-empty fragments
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn fragments_concatenate_to_input(w in ".{0,24}") {
        let h = en_mini();
        prop_assert_eq!(h.hyphenate(&w).concat(), w);
    }

    #[test]
    fn fragments_non_empty(w in word(), left in 0usize..4, right in 0usize..4) {
        let fragments = every_gap(left, right).hyphenate(&w);
        if w.is_empty() {
            prop_assert_eq!(fragments, vec![String::new()]);
        } else {
            prop_assert!(fragments.iter().all(|f| !f.is_empty()), "{:?}", fragments);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Margins
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn breaks_respect_margins(w in word(), left in 0usize..6, right in 0usize..6) {
        let h = every_gap(left, right);
        let n = w.chars().count();
        for bp in h.break_points(&w) {
            prop_assert!(bp.offset >= left.max(1), "offset {} left {}", bp.offset, left);
            prop_assert!(bp.offset + right.max(1) <= n, "offset {} right {} len {}", bp.offset, right, n);
            prop_assert_eq!(bp.weight % 2, 1);
        }
    }

    #[test]
    fn every_gap_fills_the_margin_window(w in "[a-z]{0,20}", left in 1usize..6, right in 1usize..6) {
        let h = every_gap(left, right);
        let n = w.chars().count();
        let expected = if n >= left + right { n + 1 - left - right } else { 0 };
        prop_assert_eq!(h.break_points(&w).len(), expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4-6. Exceptions, soft hyphens, determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn exception_split_is_fixed(head in "[a-z]{1,6}", tail in "[a-z]{1,6}", upper in proptest::bool::ANY) {
        let entry = format!("{head}\u{2027}{tail}");
        let dict = LanguageDictionary::new(5, 5)
            .with_patterns(2, "1a1e1i1o1u")
            .with_exceptions(entry);
        let h = Hyphenator::new(&dict);
        let w = format!("{head}{tail}");
        let w = if upper { w.to_uppercase() } else { w };
        let (a, b) = w.split_at(head.len());
        prop_assert_eq!(h.hyphenate(&w), vec![a.to_string(), b.to_string()]);
    }

    #[test]
    fn soft_hyphen_words_pass_through(a in "[a-z]{0,8}", b in "[a-z]{0,8}") {
        let w = format!("{a}{SOFT_HYPHEN}{b}");
        prop_assert_eq!(every_gap(1, 1).hyphenate(&w), vec![w.clone()]);
    }

    #[test]
    fn deterministic(w in ".{0,24}") {
        let h = en_mini();
        prop_assert_eq!(h.hyphenate(&w), h.hyphenate(&w));
        prop_assert_eq!(h.break_points(&w), en_mini().break_points(&w));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7-8. Running text and arbitrary input
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn text_only_gains_soft_hyphens(text in "[a-zA-Z ,.!?0-9]{0,80}", min in 1usize..8) {
        let out = en_mini().hyphenate_text(&text, min);
        let stripped: String = out.chars().filter(|&c| c != SOFT_HYPHEN).collect();
        prop_assert_eq!(stripped, text);
    }

    #[test]
    fn no_panic_on_any_string(w in ".*") {
        let h = every_gap(0, 0);
        let _ = h.hyphenate(&w);
        let _ = h.hyphenate_text(&w, 1);
    }
}
