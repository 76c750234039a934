//! Normalization and Luhn verification of raw card number input.
//!
//! Input may contain whitespace and hyphens anywhere; they are stripped
//! before the digit count and checksum are examined.
//!
//! Malformed input is an error, while a well-formed number with a wrong
//! check digit is reported as `Ok(false)`.

use tracing::trace;

use crate::card::{CardNumber, MAX_CARD_DIGITS, MIN_CARD_DIGITS};
use crate::error::ValidationError;
use crate::luhn;

/// Strips separators from `raw` and returns the digit sequence.
///
/// Whitespace and `-` are skipped. Any other non-digit character fails with
/// [`ValidationError::NonDigitInput`]; a digit count outside
/// `MIN_CARD_DIGITS..=MAX_CARD_DIGITS` fails with
/// [`ValidationError::InvalidLength`].
///
/// # Example
///
/// ```
/// use luhn_card::normalize;
///
/// let number = normalize("4111-1111 1111 1111").unwrap();
/// assert_eq!(number.to_string(), "4111111111111111");
/// ```
pub fn normalize(raw: &str) -> Result<CardNumber, ValidationError> {
    let mut digits = [0u8; MAX_CARD_DIGITS];
    let mut count = 0usize;

    for (position, c) in raw.chars().enumerate() {
        match c {
            '0'..='9' => {
                if count < MAX_CARD_DIGITS {
                    digits[count] = (c as u8) - b'0';
                }
                count += 1;
            }
            '-' => {}
            c if c.is_whitespace() => {}
            _ => {
                return Err(ValidationError::NonDigitInput {
                    position,
                    character: c,
                });
            }
        }
    }

    if !(MIN_CARD_DIGITS..=MAX_CARD_DIGITS).contains(&count) {
        return Err(ValidationError::InvalidLength {
            length: count,
            minimum: MIN_CARD_DIGITS,
            maximum: MAX_CARD_DIGITS,
        });
    }

    Ok(CardNumber::from_digits(&digits[..count]))
}

/// Verifies a card number with the Luhn checksum.
///
/// Returns `Ok(true)` when the checksum holds and `Ok(false)` when it does
/// not. Normalization failures are returned as errors.
///
/// # Example
///
/// ```
/// use luhn_card::{verify, ValidationError};
///
/// assert_eq!(verify("4111-1111 1111 1111"), Ok(true));
/// assert_eq!(verify("4111111111111112"), Ok(false));
/// assert!(matches!(verify("12345"), Err(ValidationError::InvalidLength { .. })));
/// ```
pub fn verify(raw: &str) -> Result<bool, ValidationError> {
    let number = normalize(raw)?;
    let valid = luhn::validate(number.digits());
    trace!(number = %number.masked(), valid, "verified card number");
    Ok(valid)
}

/// Returns true if `raw` normalizes and passes the Luhn check.
///
/// # Example
///
/// ```
/// use luhn_card::is_valid;
///
/// assert!(is_valid("4111 1111 1111 1111"));
/// assert!(!is_valid("4111 1111 1111 1112"));
/// assert!(!is_valid("not a number"));
/// ```
#[inline]
pub fn is_valid(raw: &str) -> bool {
    verify(raw).unwrap_or(false)
}
