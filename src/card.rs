//! Core card types.
//!
//! This module provides the `CardType` enum for the supported brands and the
//! `CardNumber` struct holding a normalized digit sequence.

use rand::Rng;
use std::fmt;
use std::str::FromStr;
use zeroize::Zeroize;

use crate::error::ValidationError;

/// Supported card brands for generation and formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CardType {
    /// Visa - 16 digits, grouped 4-4-4-4
    Visa,
    /// Mastercard - 16 digits, grouped 4-4-4-4
    Mastercard,
    /// American Express - 15 digits, grouped 4-6-5
    Amex,
}

impl CardType {
    /// Every supported card type, in display order.
    pub const ALL: [CardType; 3] = [Self::Visa, Self::Mastercard, Self::Amex];

    /// Returns the total number of digits for this type.
    #[inline]
    pub const fn length(&self) -> usize {
        match self {
            Self::Visa | Self::Mastercard => 16,
            Self::Amex => 15,
        }
    }

    /// Returns the digit group sizes used when formatting.
    #[inline]
    pub const fn grouping(&self) -> &'static [usize] {
        match self {
            Self::Visa | Self::Mastercard => &[4, 4, 4, 4],
            Self::Amex => &[4, 6, 5],
        }
    }

    /// Returns the lowercase name accepted by [`FromStr`].
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "visa",
            Self::Mastercard => "mastercard",
            Self::Amex => "amex",
        }
    }

    /// Picks one of the supported types uniformly at random.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CardType {
    type Err = ValidationError;

    /// Parses a type name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "visa" => Ok(Self::Visa),
            "mastercard" => Ok(Self::Mastercard),
            "amex" => Ok(Self::Amex),
            _ => Err(ValidationError::UnsupportedCardType {
                requested: s.to_string(),
            }),
        }
    }
}

/// Maximum number of digits in a card number.
pub const MAX_CARD_DIGITS: usize = 19;

/// Minimum number of digits accepted for verification.
pub const MIN_CARD_DIGITS: usize = 13;

/// A normalized card number: digits only, at most [`MAX_CARD_DIGITS`] long.
///
/// Digits live in a fixed-size array that is zeroed on drop. `Debug` output
/// is masked; `Display` prints the plain digit string.
#[derive(Clone)]
pub struct CardNumber {
    digits: [u8; MAX_CARD_DIGITS],
    digit_count: u8,
}

impl CardNumber {
    /// Builds a card number from digit values (0-9).
    ///
    /// Callers guarantee `digits.len() <= MAX_CARD_DIGITS` and that every
    /// value is below 10.
    pub(crate) fn from_digits(digits: &[u8]) -> Self {
        debug_assert!(digits.len() <= MAX_CARD_DIGITS);
        debug_assert!(digits.iter().all(|&d| d < 10));

        let mut buf = [0u8; MAX_CARD_DIGITS];
        buf[..digits.len()].copy_from_slice(digits);
        Self {
            digits: buf,
            digit_count: digits.len() as u8,
        }
    }

    /// Returns the digit values.
    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.digits[..self.digit_count as usize]
    }

    /// Returns the number of digits.
    #[inline]
    pub const fn len(&self) -> usize {
        self.digit_count as usize
    }

    /// Returns true if there are no digits.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.digit_count == 0
    }

    /// Returns the trailing check digit, if any.
    #[inline]
    pub fn check_digit(&self) -> Option<u8> {
        self.digits().last().copied()
    }

    /// Returns the leading six digits (the issuer prefix).
    pub fn iin(&self) -> String {
        let end = self.len().min(6);
        digits_to_string(&self.digits[..end])
    }

    /// Returns true if the number passes the Luhn check.
    #[inline]
    pub fn passes_luhn(&self) -> bool {
        crate::luhn::validate(self.digits())
    }

    /// Returns the number with everything but the last four digits masked.
    #[inline]
    pub fn masked(&self) -> String {
        crate::mask::mask_digits(self.digits())
    }

    /// Returns the number grouped for `card_type` and joined with hyphens.
    #[inline]
    pub fn formatted(&self, card_type: CardType) -> String {
        crate::format::format_groups(self.digits(), card_type.grouping(), "-")
    }
}

pub(crate) fn digits_to_string(digits: &[u8]) -> String {
    digits.iter().map(|&d| (b'0' + d) as char).collect()
}

impl PartialEq for CardNumber {
    fn eq(&self, other: &Self) -> bool {
        self.digits() == other.digits()
    }
}

impl Eq for CardNumber {}

impl fmt::Debug for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardNumber")
            .field("number", &self.masked())
            .field("length", &self.digit_count)
            .finish()
    }
}

impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &d in self.digits() {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

impl Drop for CardNumber {
    fn drop(&mut self) {
        self.digits.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const VISA: [u8; 16] = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];

    #[test]
    fn test_card_type_table() {
        assert_eq!(CardType::Visa.length(), 16);
        assert_eq!(CardType::Mastercard.length(), 16);
        assert_eq!(CardType::Amex.length(), 15);

        assert_eq!(CardType::Visa.grouping(), &[4, 4, 4, 4]);
        assert_eq!(CardType::Mastercard.grouping(), &[4, 4, 4, 4]);
        assert_eq!(CardType::Amex.grouping(), &[4, 6, 5]);
    }

    #[test]
    fn test_grouping_covers_length() {
        for card_type in CardType::ALL {
            let total: usize = card_type.grouping().iter().sum();
            assert_eq!(total, card_type.length(), "{}", card_type);
        }
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("visa".parse::<CardType>(), Ok(CardType::Visa));
        assert_eq!("VISA".parse::<CardType>(), Ok(CardType::Visa));
        assert_eq!("MasterCard".parse::<CardType>(), Ok(CardType::Mastercard));
        assert_eq!(" amex ".parse::<CardType>(), Ok(CardType::Amex));
    }

    #[test]
    fn test_parse_unsupported() {
        let err = "discover".parse::<CardType>().unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnsupportedCardType {
                requested: "discover".to_string()
            }
        );
        assert!("".parse::<CardType>().is_err());
    }

    #[test]
    fn test_name_round_trips() {
        for card_type in CardType::ALL {
            assert_eq!(card_type.to_string().parse::<CardType>(), Ok(card_type));
        }
    }

    #[test]
    fn test_random_type_is_supported() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert!(CardType::ALL.contains(&CardType::random(&mut rng)));
        }
    }

    #[test]
    fn test_card_number_accessors() {
        let number = CardNumber::from_digits(&VISA);
        assert_eq!(number.len(), 16);
        assert!(!number.is_empty());
        assert_eq!(number.digits(), &VISA);
        assert_eq!(number.check_digit(), Some(1));
        assert_eq!(number.iin(), "411111");
        assert_eq!(number.to_string(), "4111111111111111");
        assert!(number.passes_luhn());
    }

    #[test]
    fn test_card_number_formatted() {
        let number = CardNumber::from_digits(&VISA);
        assert_eq!(number.formatted(CardType::Visa), "4111-1111-1111-1111");
    }

    #[test]
    fn test_debug_is_masked() {
        let number = CardNumber::from_digits(&VISA);
        let debug = format!("{:?}", number);
        assert!(!debug.contains("4111111111111111"));
        assert!(debug.contains("************1111"));
    }

    #[test]
    fn test_equality_ignores_unused_buffer() {
        let a = CardNumber::from_digits(&VISA);
        let b = CardNumber::from_digits(&VISA);
        assert_eq!(a, b);
        assert_ne!(a, CardNumber::from_digits(&VISA[..15]));
    }

    #[test]
    fn test_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CardNumber>();
        assert_send_sync::<CardType>();
    }
}
