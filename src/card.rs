//! Core card types: the `CardNetwork` enum and the parsed `CardRecord`.
//!
//! A `CardRecord` is constructed once by [`crate::parse::parse`] and is
//! read-only afterwards. The card number and CVV are stored in fixed-size
//! digit arrays that are zeroed when the record is dropped, and the
//! `Debug`/`Display` impls only ever show the masked number.

use std::fmt;
use zeroize::Zeroize;

/// Maximum number of digits in a card number.
pub const MAX_NUMBER_DIGITS: usize = 19;

/// Maximum number of digits in a CVV.
pub const MAX_CVV_DIGITS: usize = 4;

/// Supported card networks.
///
/// `Unknown` is a first-class variant: classification never fails, it just
/// falls through to `Unknown` when no rule matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardNetwork {
    /// Visa - prefix 4, lengths 13 or 16
    Visa,
    /// MasterCard - prefix 51-55, length 16
    MasterCard,
    /// American Express - prefix 34 or 37, length 15
    Amex,
    /// Discover - prefix 6011, 644-649, 65, length 16
    Discover,
    /// JCB - prefix 2131, 1800, 35, lengths 15 or 16
    Jcb,
    /// Diners Club - prefix 300-305, 36, 38, length 14
    DinersClub,
    /// UnionPay - prefix 62, lengths 16-19
    UnionPay,
    /// No rule matched
    Unknown,
}

impl CardNetwork {
    /// Returns the valid number lengths for this network.
    ///
    /// Empty for `Unknown`, which accepts any length.
    #[inline]
    pub const fn valid_lengths(&self) -> &'static [u8] {
        match self {
            Self::Visa => &[13, 16],
            Self::MasterCard => &[16],
            Self::Amex => &[15],
            Self::Discover => &[16],
            Self::Jcb => &[15, 16],
            Self::DinersClub => &[14],
            Self::UnionPay => &[16, 17, 18, 19],
            Self::Unknown => &[],
        }
    }

    /// Returns true if the given number length is valid for this network.
    ///
    /// Always true for `Unknown`.
    #[inline]
    pub const fn is_valid_length(&self, length: usize) -> bool {
        if matches!(self, Self::Unknown) {
            return true;
        }
        let valid = self.valid_lengths();
        let mut i = 0;
        while i < valid.len() {
            if valid[i] as usize == length {
                return true;
            }
            i += 1;
        }
        false
    }

    /// Returns true if the given CVV length is valid for this network.
    ///
    /// AMEX requires 4 digits, other recognized networks 3; `Unknown`
    /// accepts either.
    #[inline]
    pub const fn is_valid_cvv_length(&self, length: usize) -> bool {
        match self {
            Self::Amex => length == 4,
            Self::Unknown => length == 3 || length == 4,
            _ => length == 3,
        }
    }

    /// Returns the display name for the network.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::MasterCard => "MasterCard",
            Self::Amex => "AMEX",
            Self::Discover => "Discover",
            Self::Jcb => "JCB",
            Self::DinersClub => "Diners Club",
            Self::UnionPay => "UnionPay",
            Self::Unknown => "Unknown",
        }
    }

    /// Looks up a network by its display name, case-insensitively.
    ///
    /// `Unknown` is not a nameable network; it only arises from
    /// classification.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::SUPPORTED
            .into_iter()
            .find(|network| network.name().eq_ignore_ascii_case(name))
    }

    /// All networks that can be named, classified, and generated.
    pub const SUPPORTED: [CardNetwork; 7] = [
        Self::Visa,
        Self::MasterCard,
        Self::Amex,
        Self::Discover,
        Self::Jcb,
        Self::DinersClub,
        Self::UnionPay,
    ];
}

impl fmt::Display for CardNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A parsed card record.
///
/// Immutable after construction. Holds the raw input, the card number and
/// CVV as digit arrays, the normalized expiry, and the classified network.
///
/// # Security
///
/// - Number and CVV digits are zeroed on drop (`zeroize`)
/// - `Debug` and `Display` show the masked number only
#[derive(Clone)]
pub struct CardRecord {
    /// The raw input string as given to the parser.
    raw: String,
    /// Card number digits (0-9 values, not ASCII).
    digits: [u8; MAX_NUMBER_DIGITS],
    /// Number of digits actually used.
    digit_count: u8,
    /// Expiry month, 1-12.
    month: u8,
    /// Expiry year, always 4 digits.
    year: u16,
    /// CVV digits.
    cvv: [u8; MAX_CVV_DIGITS],
    /// Number of CVV digits (1-4 at parse time, 3-4 when valid).
    cvv_count: u8,
    /// Network classified from the number at parse time.
    network: CardNetwork,
}

impl CardRecord {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        raw: String,
        digits: [u8; MAX_NUMBER_DIGITS],
        digit_count: u8,
        month: u8,
        year: u16,
        cvv: [u8; MAX_CVV_DIGITS],
        cvv_count: u8,
        network: CardNetwork,
    ) -> Self {
        Self {
            raw,
            digits,
            digit_count,
            month,
            year,
            cvv,
            cvv_count,
            network,
        }
    }

    /// Returns the raw input string this record was parsed from.
    #[inline]
    pub fn raw_input(&self) -> &str {
        &self.raw
    }

    /// Returns the card number as a plain digit string.
    ///
    /// # Security Warning
    ///
    /// Exposes the full number. For display use
    /// [`masked_number`](Self::masked_number).
    #[inline]
    pub fn number(&self) -> String {
        digits_to_string(self.number_digits())
    }

    /// Returns the card number digits.
    #[inline]
    pub(crate) fn number_digits(&self) -> &[u8] {
        &self.digits[..self.digit_count as usize]
    }

    /// Returns the number of digits in the card number.
    #[inline]
    pub const fn length(&self) -> usize {
        self.digit_count as usize
    }

    /// Returns the last four digits of the number.
    #[inline]
    pub fn last_four(&self) -> String {
        let digits = self.number_digits();
        let start = digits.len().saturating_sub(4);
        digits_to_string(&digits[start..])
    }

    /// Returns the expiry month (1-12).
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the 4-digit expiry year.
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns the CVV as a digit string.
    #[inline]
    pub fn cvv(&self) -> String {
        digits_to_string(&self.cvv[..self.cvv_count as usize])
    }

    /// Returns the number of CVV digits.
    #[inline]
    pub const fn cvv_length(&self) -> usize {
        self.cvv_count as usize
    }

    /// Returns the classified card network.
    #[inline]
    pub const fn network(&self) -> CardNetwork {
        self.network
    }

    /// Returns the number grouped for display, e.g. `4111 1111 1111 1111`.
    #[inline]
    pub fn formatted_number(&self) -> String {
        crate::format::format_digits(self.number_digits(), " ")
    }

    /// Returns the masked number, e.g. `**** **** **** 1111`.
    #[inline]
    pub fn masked_number(&self) -> String {
        crate::mask::mask_digits(self.number_digits())
    }

    /// Returns the expiry as `MM/YY`.
    #[inline]
    pub fn expiry(&self) -> String {
        format!("{:02}/{:02}", self.month, self.year % 100)
    }

    /// Returns the expiry as `MM/YYYY`.
    #[inline]
    pub fn expiry_full(&self) -> String {
        format!("{:02}/{:04}", self.month, self.year)
    }

    /// Runs all validation checks against the current system date.
    #[inline]
    pub fn validate_now(&self) -> crate::validate::ValidationReport {
        crate::validate::validate_now(self)
    }

    /// Runs all validation checks against the given current year/month.
    #[inline]
    pub fn validate_at(&self, year: u16, month: u8) -> crate::validate::ValidationReport {
        crate::validate::validate_at(self, year, month)
    }

    /// Returns true if all validation checks pass against the current date.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.validate_now().is_valid()
    }

    /// Aggregates everything into a serializable
    /// [`CardDetails`](crate::format::CardDetails).
    #[inline]
    pub fn details(&self) -> crate::format::CardDetails {
        crate::format::CardDetails::from_record(self)
    }
}

pub(crate) fn digits_to_string(digits: &[u8]) -> String {
    digits.iter().map(|&d| (b'0' + d) as char).collect()
}

impl fmt::Debug for CardRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardRecord")
            .field("network", &self.network)
            .field("number", &self.masked_number())
            .field("expiry", &self.expiry())
            .field("cvv", &"***")
            .finish()
    }
}

impl fmt::Display for CardRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (exp: {})",
            self.network,
            self.masked_number(),
            self.expiry()
        )
    }
}

impl Drop for CardRecord {
    fn drop(&mut self) {
        self.digits.zeroize();
        self.cvv.zeroize();
        self.raw.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visa_record() -> CardRecord {
        let mut digits = [0u8; MAX_NUMBER_DIGITS];
        digits[..16].copy_from_slice(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]);
        CardRecord::new(
            "4111111111111111|12/30|123".to_string(),
            digits,
            16,
            12,
            2030,
            [1, 2, 3, 0],
            3,
            CardNetwork::Visa,
        )
    }

    #[test]
    fn test_network_valid_lengths() {
        assert!(CardNetwork::Visa.is_valid_length(13));
        assert!(CardNetwork::Visa.is_valid_length(16));
        assert!(!CardNetwork::Visa.is_valid_length(15));

        assert!(CardNetwork::Amex.is_valid_length(15));
        assert!(!CardNetwork::Amex.is_valid_length(16));

        assert!(CardNetwork::UnionPay.is_valid_length(19));
        assert!(!CardNetwork::UnionPay.is_valid_length(15));

        // Unknown accepts anything
        assert!(CardNetwork::Unknown.is_valid_length(16));
        assert!(CardNetwork::Unknown.is_valid_length(7));
    }

    #[test]
    fn test_network_cvv_lengths() {
        assert!(CardNetwork::Visa.is_valid_cvv_length(3));
        assert!(!CardNetwork::Visa.is_valid_cvv_length(4));

        assert!(CardNetwork::Amex.is_valid_cvv_length(4));
        assert!(!CardNetwork::Amex.is_valid_cvv_length(3));

        assert!(CardNetwork::Unknown.is_valid_cvv_length(3));
        assert!(CardNetwork::Unknown.is_valid_cvv_length(4));
        assert!(!CardNetwork::Unknown.is_valid_cvv_length(5));
    }

    #[test]
    fn test_network_names() {
        assert_eq!(CardNetwork::Visa.name(), "Visa");
        assert_eq!(CardNetwork::Amex.name(), "AMEX");
        assert_eq!(CardNetwork::DinersClub.to_string(), "Diners Club");
    }

    #[test]
    fn test_network_from_name() {
        assert_eq!(CardNetwork::from_name("Visa"), Some(CardNetwork::Visa));
        assert_eq!(CardNetwork::from_name("amex"), Some(CardNetwork::Amex));
        assert_eq!(
            CardNetwork::from_name(" diners club "),
            Some(CardNetwork::DinersClub)
        );
        assert_eq!(CardNetwork::from_name("Maestro"), None);
        assert_eq!(CardNetwork::from_name("Unknown"), None);
    }

    #[test]
    fn test_record_accessors() {
        let record = visa_record();
        assert_eq!(record.number(), "4111111111111111");
        assert_eq!(record.length(), 16);
        assert_eq!(record.last_four(), "1111");
        assert_eq!(record.month(), 12);
        assert_eq!(record.year(), 2030);
        assert_eq!(record.cvv(), "123");
        assert_eq!(record.network(), CardNetwork::Visa);
        assert_eq!(record.expiry(), "12/30");
        assert_eq!(record.expiry_full(), "12/2030");
    }

    #[test]
    fn test_debug_and_display_are_masked() {
        let record = visa_record();
        let debug = format!("{:?}", record);
        assert!(!debug.contains("4111111111111111"));
        let display = format!("{}", record);
        assert!(!display.contains("4111111111111111"));
        assert!(display.contains("Visa"));
        assert!(display.contains("12/30"));
    }

    #[test]
    fn test_record_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CardRecord>();
        assert_send_sync::<CardNetwork>();
    }
}
