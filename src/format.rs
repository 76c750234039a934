//! Card number grouping for display.
//!
//! # Format Conventions
//!
//! - **Visa/Mastercard** (16 digits): `XXXX-XXXX-XXXX-XXXX`
//! - **American Express** (15 digits): `XXXX-XXXXXX-XXXXX`
//!
//! # Example
//!
//! ```
//! use luhn_card::format::{format_for_type, strip_separators};
//! use luhn_card::CardType;
//!
//! assert_eq!(
//!     format_for_type("4111111111111111", CardType::Visa, "-"),
//!     "4111-1111-1111-1111"
//! );
//! assert_eq!(
//!     format_for_type("378282246310005", CardType::Amex, " "),
//!     "3782 822463 10005"
//! );
//! assert_eq!(strip_separators("3782-822463 10005"), "378282246310005");
//! ```

use crate::card::CardType;

/// Joins `digits` into groups of the given sizes with `separator`.
///
/// Digits beyond the last group are appended as one trailing group; groups
/// past the end of `digits` are cut short or dropped.
pub fn format_groups(digits: &[u8], groups: &[usize], separator: &str) -> String {
    let mut result = String::with_capacity(digits.len() + groups.len() * separator.len());
    let mut rest = digits;

    for &size in groups {
        if rest.is_empty() {
            break;
        }
        let (group, tail) = rest.split_at(size.min(rest.len()));
        push_group(&mut result, group, separator);
        rest = tail;
    }

    if !rest.is_empty() {
        push_group(&mut result, rest, separator);
    }

    result
}

fn push_group(out: &mut String, group: &[u8], separator: &str) {
    if !out.is_empty() {
        out.push_str(separator);
    }
    out.extend(group.iter().map(|&d| (b'0' + d) as char));
}

/// Formats a raw number with the grouping of `card_type`.
///
/// Only ASCII digits of `input` are used; everything else is dropped first.
pub fn format_for_type(input: &str, card_type: CardType, separator: &str) -> String {
    let digits: Vec<u8> = input
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    format_groups(&digits, card_type.grouping(), separator)
}

/// Removes whitespace and hyphens, leaving everything else in place.
///
/// This is the separator rule used by [`crate::normalize`].
pub fn strip_separators(input: &str) -> String {
    input
        .chars()
        .filter(|&c| c != '-' && !c.is_whitespace())
        .collect()
}
