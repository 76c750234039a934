//! Fuzz target for generation with arbitrary prefixes and lengths.

#![no_main]

use libfuzzer_sys::fuzz_target;
use luhn_card::{generate_by_type, generate_with_prefix, luhn};

fuzz_target!(|input: (&str, u8)| {
    let (prefix, length) = input;
    let length = length as usize;

    if let Ok(number) = generate_with_prefix(prefix, length) {
        assert_eq!(number.len(), length);
        assert!(number.to_string().starts_with(prefix));
        assert!(luhn::validate(number.digits()));
    }

    let _ = generate_by_type(prefix);
});
