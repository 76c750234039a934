//! Luhn (mod 10) checksum.
//!
//! Positions are counted from the right. In a complete number the rightmost
//! digit (the check digit) is added as-is, the one to its left is doubled,
//! and so on alternately. A doubled value above 9 contributes the sum of its
//! two decimal digits, which is the same as subtracting 9.

/// Doubled digit with 9 subtracted when the result exceeds 9, indexed by digit.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Sums digits right to left, doubling every position whose parity matches
/// `double_rightmost`.
#[inline]
fn weighted_sum(digits: &[u8], double_rightmost: bool) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            let doubled = (i % 2 == 0) == double_rightmost;
            if doubled {
                DOUBLE_TABLE[d as usize] as u32
            } else {
                d as u32
            }
        })
        .sum()
}

/// Computes the Luhn sum of a complete number (not reduced modulo 10).
///
/// The rightmost digit is not doubled.
#[inline]
pub fn checksum(digits: &[u8]) -> u32 {
    weighted_sum(digits, false)
}

/// Returns true if `digits` form a Luhn-valid number.
///
/// An empty slice is never valid.
///
/// # Example
///
/// ```
/// use luhn_card::luhn::validate;
///
/// assert!(validate(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]));
/// assert!(!validate(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2]));
/// ```
#[inline]
pub fn validate(digits: &[u8]) -> bool {
    !digits.is_empty() && checksum(digits) % 10 == 0
}

/// Computes the check digit to append to `partial`.
///
/// Once the check digit is appended every existing digit moves one position
/// left, so here the rightmost digit of `partial` is the one doubled.
///
/// # Example
///
/// ```
/// use luhn_card::luhn::check_digit;
///
/// let partial = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert_eq!(check_digit(&partial), 1);
/// ```
#[inline]
pub fn check_digit(partial: &[u8]) -> u8 {
    let sum = weighted_sum(partial, true);
    ((10 - sum % 10) % 10) as u8
}
