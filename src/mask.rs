//! Masking for log output.
//!
//! Generated numbers are test data, but callers may also pass real numbers
//! to `verify`. Anything this crate logs goes through these functions so
//! only the last four digits ever reach a log line.

/// Number of trailing digits left visible.
const VISIBLE_DIGITS: usize = 4;

/// Masks all but the last four digits with `*`.
///
/// Inputs of four digits or fewer are masked completely.
///
/// # Example
///
/// ```
/// use luhn_card::mask::mask_digits;
///
/// let digits = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 3];
/// assert_eq!(mask_digits(&digits), "************1123");
/// ```
pub fn mask_digits(digits: &[u8]) -> String {
    let len = digits.len();
    if len <= VISIBLE_DIGITS {
        return "*".repeat(len);
    }

    let mut result = "*".repeat(len - VISIBLE_DIGITS);
    result.extend(digits[len - VISIBLE_DIGITS..].iter().map(|&d| (b'0' + d) as char));
    result
}

/// Masks a raw string, keeping only its ASCII digits.
///
/// # Example
///
/// ```
/// use luhn_card::mask::mask_str;
///
/// assert_eq!(mask_str("3782-822463-10005"), "***********0005");
/// ```
pub fn mask_str(input: &str) -> String {
    let digits: Vec<u8> = input
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    mask_digits(&digits)
}
