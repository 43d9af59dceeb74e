//! Canonical card number formatting and the aggregated details view.
//!
//! Grouping policy:
//!
//! - 15 digits (AMEX): `4-6-5`
//! - 14 digits (Diners Club): `4-6-4`
//! - anything else: groups of 4 left to right, trailing group keeps the
//!   remainder

use crate::card::{digits_to_string, CardRecord};
use serde::Serialize;

/// Returns the group sizes used to render a number of the given length.
pub(crate) fn grouping(length: usize) -> Vec<usize> {
    match length {
        15 => vec![4, 6, 5],
        14 => vec![4, 6, 4],
        _ => {
            let mut groups = vec![4; length / 4];
            if length % 4 != 0 {
                groups.push(length % 4);
            }
            groups
        }
    }
}

/// Formats a digit slice with the given separator between groups.
pub(crate) fn format_digits(digits: &[u8], separator: &str) -> String {
    if digits.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(digits.len() * 2);
    let mut pos = 0;
    for (i, size) in grouping(digits.len()).into_iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        let end = (pos + size).min(digits.len());
        out.push_str(&digits_to_string(&digits[pos..end]));
        pos = end;
    }
    out
}

/// Formats a card number string with spaces, ignoring any existing
/// formatting characters.
///
/// # Example
///
/// ```
/// use ccparser::format::format_card_number;
///
/// assert_eq!(format_card_number("4111111111111111"), "4111 1111 1111 1111");
/// assert_eq!(format_card_number("378282246310005"), "3782 822463 10005");
/// ```
pub fn format_card_number(number: &str) -> String {
    format_with_separator(number, " ")
}

/// Formats a card number string with a custom separator.
///
/// # Example
///
/// ```
/// use ccparser::format::format_with_separator;
///
/// assert_eq!(
///     format_with_separator("4111 1111 1111 1111", "-"),
///     "4111-1111-1111-1111"
/// );
/// ```
pub fn format_with_separator(number: &str, separator: &str) -> String {
    let digits: Vec<u8> = number
        .chars()
        .filter_map(|c| c.to_digit(10).map(|d| d as u8))
        .collect();
    format_digits(&digits, separator)
}

/// Strips all formatting from a card number, leaving only digits.
pub fn strip_formatting(number: &str) -> String {
    number.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Everything about a parsed card in one serializable structure.
///
/// This is the display/aggregation view of a [`CardRecord`], shaped for
/// JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct CardDetails {
    /// The plain card number.
    pub number: String,
    /// The number grouped for display.
    pub formatted_number: String,
    /// The masked number.
    pub masked_number: String,
    /// Expiry as `MM/YY`.
    pub expiry: String,
    /// Expiry month, 1-12.
    pub month: u8,
    /// 4-digit expiry year.
    pub year: u16,
    /// The CVV digits.
    pub cvv: String,
    /// Display name of the classified network.
    pub network: String,
    /// Conjunction of all validation checks against the current date.
    pub is_valid: bool,
}

impl CardDetails {
    /// Builds the details view from a record, judging validity against the
    /// current system date.
    pub fn from_record(record: &CardRecord) -> Self {
        Self {
            number: record.number(),
            formatted_number: record.formatted_number(),
            masked_number: record.masked_number(),
            expiry: record.expiry(),
            month: record.month(),
            year: record.year(),
            cvv: record.cvv(),
            network: record.network().name().to_string(),
            is_valid: record.is_valid(),
        }
    }
}
