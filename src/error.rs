//! Error types for card number verification and generation.
//!
//! Every failure in this crate is a [`ValidationError`]. The variants carry
//! enough detail for a caller to explain what was wrong with the input.

use crate::card::CardType;
use std::fmt;

/// Errors returned by normalization, verification and generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A character other than a digit, whitespace or hyphen was found.
    NonDigitInput {
        /// Character position in the raw input (0-indexed).
        position: usize,
        /// The offending character.
        character: char,
    },

    /// The number of digits is outside the accepted range.
    ///
    /// Raised by verification for inputs outside 13..=19 digits, and by
    /// generation when the requested length leaves no room for the check
    /// digit after the prefix.
    InvalidLength {
        /// The digit count that was provided or requested.
        length: usize,
        /// Smallest accepted digit count.
        minimum: usize,
        /// Largest accepted digit count.
        maximum: usize,
    },

    /// The requested card type is not one of the supported brands.
    UnsupportedCardType {
        /// The type name as the caller gave it.
        requested: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonDigitInput {
                position,
                character,
            } => {
                write!(
                    f,
                    "credit card number must contain only digits: found '{}' at position {}",
                    character.escape_default(),
                    position
                )
            }

            Self::InvalidLength {
                length,
                minimum,
                maximum,
            } => {
                if minimum == maximum {
                    write!(
                        f,
                        "credit card number must be {} digits, got {}",
                        minimum, length
                    )
                } else {
                    write!(
                        f,
                        "credit card number must be between {} and {} digits, got {}",
                        minimum, maximum, length
                    )
                }
            }

            Self::UnsupportedCardType { requested } => {
                let supported: Vec<&str> = CardType::ALL.iter().map(|t| t.name()).collect();
                write!(
                    f,
                    "invalid card type '{}'. Supported types are {}",
                    requested,
                    supported.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}
