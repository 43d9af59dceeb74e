//! Validation checks over a parsed [`CardRecord`].
//!
//! Four independent checks, all pure and total: Luhn checksum, expiry,
//! CVV length for the classified network, and number length for the
//! classified network. The overall verdict is their conjunction.
//!
//! The current date is an input, not ambient state: use
//! [`validate_at`] for deterministic results and [`validate_now`] when the
//! system clock is fine.

use crate::card::CardRecord;
use crate::luhn;
use std::time::{SystemTime, UNIX_EPOCH};

/// Outcome of the four validation checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationReport {
    /// Luhn checksum passed.
    pub luhn_valid: bool,
    /// Expiry is the current month or later.
    pub expiry_valid: bool,
    /// CVV length matches the network (4 for AMEX, 3 otherwise, either for
    /// Unknown).
    pub cvv_valid: bool,
    /// Number length is in the network's allowed set (always true for
    /// Unknown).
    pub network_length_valid: bool,
}

impl ValidationReport {
    /// Returns true iff every check passed.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.luhn_valid && self.expiry_valid && self.cvv_valid && self.network_length_valid
    }
}

/// Validates a record against an explicit current year and month.
///
/// # Example
///
/// ```
/// use ccparser::{parse, validate::validate_at};
///
/// let card = parse("4111111111111111|12/30|123").unwrap();
/// let report = validate_at(&card, 2026, 8);
/// assert!(report.is_valid());
///
/// // Same card judged from 2031 has expired
/// assert!(!validate_at(&card, 2031, 1).expiry_valid);
/// ```
pub fn validate_at(record: &CardRecord, current_year: u16, current_month: u8) -> ValidationReport {
    let network = record.network();

    ValidationReport {
        luhn_valid: luhn::validate(record.number_digits()),
        expiry_valid: is_expiry_valid(record.month(), record.year(), current_year, current_month),
        cvv_valid: network.is_valid_cvv_length(record.cvv_length()),
        network_length_valid: network.is_valid_length(record.length()),
    }
}

/// Validates a record against the current system date.
pub fn validate_now(record: &CardRecord) -> ValidationReport {
    let (year, month) = current_year_month();
    validate_at(record, year, month)
}

/// Returns true if the expiry is the given current month or later.
///
/// A card is valid through the end of its expiry month.
#[inline]
pub const fn is_expiry_valid(month: u8, year: u16, current_year: u16, current_month: u8) -> bool {
    year > current_year || (year == current_year && month >= current_month)
}

/// Current year and month (UTC) from the Unix timestamp.
pub(crate) fn current_year_month() -> (u16, u8) {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    year_month_from_unix(secs)
}

/// Converts Unix seconds to a (year, month) civil date.
///
/// Exact Gregorian conversion (Hinnant's `civil_from_days`); a day-count
/// approximation drifts by the accumulated leap days and misreports the
/// month near month boundaries.
pub(crate) fn year_month_from_unix(secs: u64) -> (u16, u8) {
    let days = (secs / 86400) as i64;

    // Shift the epoch to 0000-03-01 so leap days land at the end of the year
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;

    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let mut year = yoe + era * 400;
    if month <= 2 {
        year += 1;
    }

    (year as u16, month as u8)
}
