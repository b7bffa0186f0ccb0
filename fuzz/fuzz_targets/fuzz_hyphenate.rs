#![no_main]

use std::sync::OnceLock;

use ftui_hyphen::{Hyphenator, LanguageDictionary};
use libfuzzer_sys::fuzz_target;

fn engine() -> &'static Hyphenator {
    static ENGINE: OnceLock<Hyphenator> = OnceLock::new();
    ENGINE.get_or_init(|| {
        let dict = LanguageDictionary::from_json(include_str!(
            "../../crates/ftui-hyphen/tests/fixtures/en-mini.json"
        ))
        .expect("fixture parses");
        Hyphenator::new(&dict)
    })
}

fuzz_target!(|word: &str| {
    let h = engine();
    let fragments = h.hyphenate(word);
    assert_eq!(fragments.concat(), word);
    let _ = h.hyphenate_text(word, 1);
});
