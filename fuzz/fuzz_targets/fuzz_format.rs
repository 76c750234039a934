//! Fuzz target for formatting.
//!
//! Formatting must never panic and must preserve the digits it was given.

#![no_main]

use libfuzzer_sys::fuzz_target;
use luhn_card::{format, mask, CardType};

fuzz_target!(|data: &str| {
    let original_digits: String = data.chars().filter(char::is_ascii_digit).collect();

    for card_type in CardType::ALL {
        for separator in ["-", " ", ""] {
            let formatted = format::format_for_type(data, card_type, separator);
            let stripped: String = formatted.chars().filter(char::is_ascii_digit).collect();
            assert_eq!(stripped, original_digits, "formatting must preserve digits");
        }
    }

    let _ = format::strip_separators(data);
    assert_eq!(mask::mask_str(data).len(), original_digits.len());
});
