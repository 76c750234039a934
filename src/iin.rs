//! Issuer identification number (IIN) table.
//!
//! Generation only ever starts numbers with one of these prefixes. They
//! cover Visa, Mastercard, American Express and Discover style ranges and
//! are all six digits long.

use rand::Rng;

/// Length of every prefix in [`VALID_IINS`].
pub const IIN_LENGTH: usize = 6;

/// Known issuer prefixes used for generation.
pub const VALID_IINS: [&str; 20] = [
    "411111", "422228", "433333", "444449", "455551", "466663", "477775", "488887",
    "499999", "511111", "522228", "533333", "544449", "555551", "341111", "372228",
    "601100", "601101", "601102", "601103",
];

/// Picks one prefix from [`VALID_IINS`] uniformly at random.
#[inline]
pub fn random_iin<R: Rng>(rng: &mut R) -> &'static str {
    VALID_IINS[rng.gen_range(0..VALID_IINS.len())]
}

/// Returns true if `digits` start with one of the known prefixes.
///
/// # Example
///
/// ```
/// use luhn_card::iin::is_known_iin;
///
/// assert!(is_known_iin(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]));
/// assert!(!is_known_iin(&[4, 0, 1, 2, 8, 8, 8, 8, 8, 8, 8, 8, 1, 8, 8, 1]));
/// ```
pub fn is_known_iin(digits: &[u8]) -> bool {
    if digits.len() < IIN_LENGTH {
        return false;
    }
    let head = &digits[..IIN_LENGTH];
    VALID_IINS
        .iter()
        .any(|iin| iin.bytes().zip(head).all(|(c, &d)| c - b'0' == d))
}
