#![no_main]

use arbitrary::Arbitrary;
use ftui_hyphen::{Hyphenator, LanguageDictionary};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    groups: Vec<(u8, String)>,
    exceptions: Option<String>,
    left_min: u8,
    right_min: u8,
    word: String,
}

fuzz_target!(|input: Input| {
    let mut dict = LanguageDictionary::new(input.left_min.into(), input.right_min.into());
    for (len, text) in input.groups {
        dict = dict.with_patterns(len.into(), text);
    }
    dict.exceptions = input.exceptions;
    let h = Hyphenator::new(&dict);
    assert_eq!(h.hyphenate(&input.word).concat(), input.word);
});
