//! Fuzz target for verification.
//!
//! verify() must never panic, and must agree with the digit-level check.

#![no_main]

use libfuzzer_sys::fuzz_target;
use luhn_card::{is_valid, luhn, normalize, verify};

fuzz_target!(|data: &str| {
    let result = verify(data);
    assert_eq!(is_valid(data), result == Ok(true));

    if let Ok(number) = normalize(data) {
        assert_eq!(result, Ok(luhn::validate(number.digits())));
        assert_eq!(number.to_string().len(), number.len());
    }
});
