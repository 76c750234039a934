//! # luhn_card
//!
//! Luhn verification and generation of test card numbers for a small,
//! fixed set of issuer prefixes.
//!
//! ## Quick Start
//!
//! ```rust
//! use luhn_card::{verify, generate_by_type, ValidationError};
//!
//! // Separators are stripped before checking
//! assert_eq!(verify("4111-1111 1111 1111"), Ok(true));
//! assert_eq!(verify("4111111111111112"), Ok(false));
//!
//! // Malformed input is an error, not just "invalid"
//! assert!(matches!(verify("12345"), Err(ValidationError::InvalidLength { .. })));
//! assert!(matches!(
//!     verify("4111-11a1-1111-1111"),
//!     Err(ValidationError::NonDigitInput { character: 'a', .. })
//! ));
//!
//! // Generate a grouped Amex-style number
//! let amex = generate_by_type("amex").unwrap();
//! let groups: Vec<usize> = amex.split('-').map(str::len).collect();
//! assert_eq!(groups, [4, 6, 5]);
//! assert_eq!(verify(&amex), Ok(true));
//! ```
//!
//! ## Generation
//!
//! ```rust
//! use luhn_card::{generate_valid, generate_with_prefix_rng, iin};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! // Random prefix from the IIN table
//! let number = generate_valid(16).unwrap();
//! assert!(iin::is_known_iin(number.digits()));
//!
//! // Seeded generation is reproducible
//! let a = generate_with_prefix_rng("601100", 16, &mut StdRng::seed_from_u64(1)).unwrap();
//! let b = generate_with_prefix_rng("601100", 16, &mut StdRng::seed_from_u64(1)).unwrap();
//! assert_eq!(a, b);
//! ```
//!
//! ## Supported Card Types
//!
//! | Type | Length | Grouping |
//! |------|--------|----------|
//! | visa | 16 | 4-4-4-4 |
//! | mastercard | 16 | 4-4-4-4 |
//! | amex | 15 | 4-6-5 |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | `Serialize`/`Deserialize` for `CardType` |
//! | `cli` | The `cardtool` command-line tool |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod card;
pub mod error;
pub mod format;
pub mod generate;
pub mod iin;
pub mod luhn;
pub mod mask;
pub mod verify;

// Re-export main types at crate root
pub use card::{CardNumber, CardType, MAX_CARD_DIGITS, MIN_CARD_DIGITS};
pub use error::ValidationError;
pub use generate::{
    generate_by_type, generate_by_type_with_rng, generate_for_type, generate_for_type_with_rng,
    generate_valid, generate_valid_with_rng, generate_with_prefix, generate_with_prefix_rng,
    CardGenerator,
};
pub use verify::{is_valid, normalize, verify};
