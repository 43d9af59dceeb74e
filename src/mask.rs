//! Masked number rendering.
//!
//! A masked number reveals exactly the last 4 digits and replaces everything
//! else with `*`, using the same grouping as the formatted number:
//!
//! - 16 digits: `**** **** **** 1111`
//! - 15 digits: `**** ****** *0005`
//! - 14 digits: `**** ****** 5904`

use crate::card::digits_to_string;
use crate::format::grouping;

/// Masks a digit slice, keeping only the last 4 digits visible.
///
/// Slices of 4 digits or fewer are returned unmasked, matching the
/// formatter's behavior for degenerate lengths.
pub(crate) fn mask_digits(digits: &[u8]) -> String {
    let len = digits.len();
    if len <= 4 {
        return digits_to_string(digits);
    }

    let visible_from = len - 4;
    let mut out = String::with_capacity(len * 2);
    let mut pos = 0;

    for (i, size) in grouping(len).into_iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let end = (pos + size).min(len);
        for (j, &d) in digits[pos..end].iter().enumerate() {
            if pos + j < visible_from {
                out.push('*');
            } else {
                out.push((b'0' + d) as char);
            }
        }
        pos = end;
    }

    out
}

/// Masks a card number string, ignoring any existing formatting characters.
///
/// # Example
///
/// ```
/// use ccparser::mask::mask_card_number;
///
/// assert_eq!(mask_card_number("4111111111111111"), "**** **** **** 1111");
/// assert_eq!(mask_card_number("378282246310005"), "**** ****** *0005");
/// ```
pub fn mask_card_number(number: &str) -> String {
    let digits: Vec<u8> = number
        .chars()
        .filter_map(|c| c.to_digit(10).map(|d| d as u8))
        .collect();
    mask_digits(&digits)
}

/// Extracts the last 4 digits from a card number string.
///
/// Returns the empty string when there are fewer than 4 digits.
pub fn last_four(number: &str) -> String {
    let digits: Vec<char> = number.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() >= 4 {
        digits[digits.len() - 4..].iter().collect()
    } else {
        String::new()
    }
}
