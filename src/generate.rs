//! Luhn-valid card number generation for test data.
//!
//! Numbers start with an issuer prefix, continue with uniformly random
//! filler digits and end with a computed check digit. They are not connected
//! to real accounts.
//!
//! Every random operation has a `_with_rng` form taking any [`rand::Rng`],
//! so seeded generators give reproducible output. The plain forms use the
//! thread-local generator and are safe to call from any thread.
//!
//! # Example
//!
//! ```
//! use luhn_card::{generate_by_type, generate_with_prefix, verify};
//!
//! let number = generate_with_prefix("411111", 16).unwrap();
//! assert!(number.to_string().starts_with("411111"));
//! assert_eq!(verify(&number.to_string()), Ok(true));
//!
//! let amex = generate_by_type("amex").unwrap();
//! assert_eq!(amex.len(), 17); // 15 digits and two hyphens
//! assert_eq!(verify(&amex), Ok(true));
//! ```

use rand::Rng;
use tracing::debug;

use crate::card::{CardNumber, CardType, MAX_CARD_DIGITS};
use crate::error::ValidationError;
use crate::{iin, luhn};

/// Generates a Luhn-valid number of `total_length` digits starting with `iin`.
///
/// Fails with [`ValidationError::NonDigitInput`] if `iin` contains anything
/// but ASCII digits, and with [`ValidationError::InvalidLength`] unless
/// `iin.len() < total_length <= MAX_CARD_DIGITS`.
pub fn generate_with_prefix(iin: &str, total_length: usize) -> Result<CardNumber, ValidationError> {
    generate_with_prefix_rng(iin, total_length, &mut rand::thread_rng())
}

/// Like [`generate_with_prefix`], drawing filler digits from `rng`.
pub fn generate_with_prefix_rng<R: Rng>(
    iin: &str,
    total_length: usize,
    rng: &mut R,
) -> Result<CardNumber, ValidationError> {
    let mut digits = [0u8; MAX_CARD_DIGITS];
    let mut prefix_len = 0usize;

    for (position, c) in iin.chars().enumerate() {
        let digit = c.to_digit(10).ok_or(ValidationError::NonDigitInput {
            position,
            character: c,
        })?;
        if prefix_len < MAX_CARD_DIGITS {
            digits[prefix_len] = digit as u8;
        }
        prefix_len += 1;
    }

    // At least the check digit has to follow the prefix.
    if total_length <= prefix_len || total_length > MAX_CARD_DIGITS {
        return Err(ValidationError::InvalidLength {
            length: total_length,
            minimum: prefix_len + 1,
            maximum: MAX_CARD_DIGITS,
        });
    }

    for slot in &mut digits[prefix_len..total_length - 1] {
        *slot = rng.gen_range(0..10);
    }
    digits[total_length - 1] = luhn::check_digit(&digits[..total_length - 1]);

    let number = CardNumber::from_digits(&digits[..total_length]);
    debug!(
        number = %number.masked(),
        length = total_length,
        "generated card number"
    );
    Ok(number)
}

/// Generates a Luhn-valid number of `length` digits with a random known IIN.
///
/// # Example
///
/// ```
/// use luhn_card::{generate_valid, iin};
///
/// let number = generate_valid(16).unwrap();
/// assert_eq!(number.len(), 16);
/// assert!(iin::is_known_iin(number.digits()));
/// assert!(number.passes_luhn());
/// ```
pub fn generate_valid(length: usize) -> Result<CardNumber, ValidationError> {
    generate_valid_with_rng(length, &mut rand::thread_rng())
}

/// Like [`generate_valid`], using `rng` for the prefix choice and filler.
pub fn generate_valid_with_rng<R: Rng>(
    length: usize,
    rng: &mut R,
) -> Result<CardNumber, ValidationError> {
    let prefix = iin::random_iin(rng);
    generate_with_prefix_rng(prefix, length, rng)
}

/// Generates a hyphen-grouped number for the named card type.
///
/// The name is matched case-insensitively against `visa`, `mastercard` and
/// `amex`; anything else fails with
/// [`ValidationError::UnsupportedCardType`].
///
/// # Example
///
/// ```
/// use luhn_card::{generate_by_type, ValidationError};
///
/// let visa = generate_by_type("Visa").unwrap();
/// assert_eq!(visa.split('-').count(), 4);
///
/// assert!(matches!(
///     generate_by_type("discover"),
///     Err(ValidationError::UnsupportedCardType { .. })
/// ));
/// ```
pub fn generate_by_type(card_type: &str) -> Result<String, ValidationError> {
    generate_by_type_with_rng(card_type, &mut rand::thread_rng())
}

/// Like [`generate_by_type`], drawing randomness from `rng`.
pub fn generate_by_type_with_rng<R: Rng>(
    card_type: &str,
    rng: &mut R,
) -> Result<String, ValidationError> {
    let card_type: CardType = card_type.parse()?;
    generate_for_type_with_rng(card_type, rng)
}

/// Generates a hyphen-grouped number for an already parsed [`CardType`].
pub fn generate_for_type(card_type: CardType) -> Result<String, ValidationError> {
    generate_for_type_with_rng(card_type, &mut rand::thread_rng())
}

/// Like [`generate_for_type`], drawing randomness from `rng`.
pub fn generate_for_type_with_rng<R: Rng>(
    card_type: CardType,
    rng: &mut R,
) -> Result<String, ValidationError> {
    let number = generate_valid_with_rng(card_type.length(), rng)?;
    Ok(number.formatted(card_type))
}

/// Builder for repeated generation with fixed settings.
///
/// Without an explicit prefix each number gets a random IIN from the table.
///
/// # Example
///
/// ```
/// use luhn_card::{CardGenerator, CardType};
///
/// let numbers = CardGenerator::for_type(CardType::Amex)
///     .prefix("372228")
///     .generate_many(3)
///     .unwrap();
/// assert!(numbers.iter().all(|n| n.len() == 15 && n.iin() == "372228"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardGenerator {
    prefix: Option<String>,
    length: usize,
}

impl CardGenerator {
    /// Creates a generator for numbers of `length` digits.
    pub fn new(length: usize) -> Self {
        Self {
            prefix: None,
            length,
        }
    }

    /// Creates a generator using the length of `card_type`.
    pub fn for_type(card_type: CardType) -> Self {
        Self::new(card_type.length())
    }

    /// Sets the total length.
    pub fn length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Fixes the prefix instead of picking a random IIN.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Generates one number.
    pub fn generate(&self) -> Result<CardNumber, ValidationError> {
        self.generate_with_rng(&mut rand::thread_rng())
    }

    /// Generates one number using `rng`.
    pub fn generate_with_rng<R: Rng>(
        &self,
        rng: &mut R,
    ) -> Result<CardNumber, ValidationError> {
        match &self.prefix {
            Some(prefix) => generate_with_prefix_rng(prefix, self.length, rng),
            None => generate_valid_with_rng(self.length, rng),
        }
    }

    /// Generates `count` numbers, stopping at the first error.
    pub fn generate_many(&self, count: usize) -> Result<Vec<CardNumber>, ValidationError> {
        let mut rng = rand::thread_rng();
        (0..count).map(|_| self.generate_with_rng(&mut rng)).collect()
    }
}
