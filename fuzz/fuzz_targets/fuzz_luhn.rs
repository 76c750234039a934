//! Fuzz target for the Luhn checksum.

#![no_main]

use libfuzzer_sys::fuzz_target;
use luhn_card::luhn;

fuzz_target!(|data: &[u8]| {
    // Clamp values to valid digit range
    let digits: Vec<u8> = data.iter().map(|&b| b % 10).collect();

    let _ = luhn::validate(&digits);

    let check = luhn::check_digit(&digits);
    assert!(check <= 9, "check digit out of range");

    let mut full = digits;
    full.push(check);
    assert!(luhn::validate(&full), "appending the check digit must validate");
});
