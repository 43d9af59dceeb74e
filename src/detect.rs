//! Network classification via an ordered rule table.
//!
//! Each [`NetworkRule`] pairs a prefix predicate with the network's allowed
//! length set and expected CVV length. Rules are evaluated top to bottom and
//! the first rule whose prefix matches *and* whose length set contains the
//! number's length wins; patterns are anchored on the whole number, so a
//! 15-digit number starting with 4 is `Unknown`, not a malformed Visa.

use crate::card::CardNetwork;

/// One row of the classification table.
pub struct NetworkRule {
    /// The network this rule classifies.
    pub network: CardNetwork,
    /// Allowed number lengths.
    pub lengths: &'static [u8],
    /// Expected CVV length.
    pub cvv_length: u8,
    prefix_matches: fn(&[u8]) -> bool,
}

impl NetworkRule {
    /// Returns true if the full number matches this rule.
    #[inline]
    pub fn matches(&self, digits: &[u8]) -> bool {
        (self.prefix_matches)(digits) && self.lengths.contains(&(digits.len() as u8))
    }
}

/// The ordered classification table. First match wins.
pub const RULES: &[NetworkRule] = &[
    NetworkRule {
        network: CardNetwork::Visa,
        lengths: CardNetwork::Visa.valid_lengths(),
        cvv_length: 3,
        prefix_matches: |d| matches!(d, [4, ..]),
    },
    NetworkRule {
        network: CardNetwork::MasterCard,
        lengths: CardNetwork::MasterCard.valid_lengths(),
        cvv_length: 3,
        prefix_matches: |d| matches!(d, [5, 1..=5, ..]),
    },
    NetworkRule {
        network: CardNetwork::Amex,
        lengths: CardNetwork::Amex.valid_lengths(),
        cvv_length: 4,
        prefix_matches: |d| matches!(d, [3, 4, ..] | [3, 7, ..]),
    },
    NetworkRule {
        network: CardNetwork::Discover,
        lengths: CardNetwork::Discover.valid_lengths(),
        cvv_length: 3,
        prefix_matches: |d| matches!(d, [6, 0, 1, 1, ..] | [6, 4, 4..=9, ..] | [6, 5, ..]),
    },
    NetworkRule {
        network: CardNetwork::Jcb,
        lengths: CardNetwork::Jcb.valid_lengths(),
        cvv_length: 3,
        prefix_matches: |d| matches!(d, [2, 1, 3, 1, ..] | [1, 8, 0, 0, ..] | [3, 5, ..]),
    },
    NetworkRule {
        network: CardNetwork::DinersClub,
        lengths: CardNetwork::DinersClub.valid_lengths(),
        cvv_length: 3,
        prefix_matches: |d| matches!(d, [3, 0, 0..=5, ..] | [3, 6, ..] | [3, 8, ..]),
    },
    NetworkRule {
        network: CardNetwork::UnionPay,
        lengths: CardNetwork::UnionPay.valid_lengths(),
        cvv_length: 3,
        prefix_matches: |d| matches!(d, [6, 2, ..]),
    },
];

/// Classifies a card number by its digits.
///
/// # Example
///
/// ```
/// use ccparser::detect::classify;
/// use ccparser::CardNetwork;
///
/// let visa = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert_eq!(classify(&visa), CardNetwork::Visa);
///
/// let nines = [9u8; 16];
/// assert_eq!(classify(&nines), CardNetwork::Unknown);
/// ```
#[inline]
pub fn classify(digits: &[u8]) -> CardNetwork {
    RULES
        .iter()
        .find(|rule| rule.matches(digits))
        .map(|rule| rule.network)
        .unwrap_or(CardNetwork::Unknown)
}

/// Classifies a card number given as a string, ignoring any non-digit
/// characters (spaces, separators).
pub fn classify_str(number: &str) -> CardNetwork {
    let digits: Vec<u8> = number
        .chars()
        .filter_map(|c| c.to_digit(10).map(|d| d as u8))
        .collect();
    classify(&digits)
}

/// Returns the rule for a network, if it has one (`Unknown` does not).
pub fn rule_for(network: CardNetwork) -> Option<&'static NetworkRule> {
    RULES.iter().find(|rule| rule.network == network)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(s: &str) -> Vec<u8> {
        s.bytes().map(|b| b - b'0').collect()
    }

    #[test]
    fn test_classify_visa() {
        assert_eq!(classify_str("4111111111111111"), CardNetwork::Visa);
        // 13-digit Visa
        assert_eq!(classify_str("4222222222222"), CardNetwork::Visa);
        // Wrong length for Visa is not Visa
        assert_eq!(classify_str("411111111111111"), CardNetwork::Unknown);
    }

    #[test]
    fn test_classify_mastercard() {
        assert_eq!(classify_str("5100000000000000"), CardNetwork::MasterCard);
        assert_eq!(classify_str("5500000000000004"), CardNetwork::MasterCard);
        // 56 is not MasterCard
        assert_eq!(classify_str("5600000000000000"), CardNetwork::Unknown);
    }

    #[test]
    fn test_classify_amex() {
        assert_eq!(classify_str("340000000000009"), CardNetwork::Amex);
        assert_eq!(classify_str("378282246310005"), CardNetwork::Amex);
        // AMEX prefix with 16 digits is not AMEX
        assert_eq!(classify_str("3400000000000009"), CardNetwork::Unknown);
    }

    #[test]
    fn test_classify_discover() {
        assert_eq!(classify_str("6011111111111117"), CardNetwork::Discover);
        assert_eq!(classify_str("6500000000000002"), CardNetwork::Discover);
        // 644-649 range
        assert_eq!(classify_str("6445644564456445"), CardNetwork::Discover);
    }

    #[test]
    fn test_classify_jcb() {
        // 35xx, 16 digits
        assert_eq!(classify_str("3530111333300000"), CardNetwork::Jcb);
        // Legacy 2131/1800, 15 digits
        assert_eq!(classify_str("213100000000000"), CardNetwork::Jcb);
        assert_eq!(classify_str("180000000000000"), CardNetwork::Jcb);
    }

    #[test]
    fn test_classify_diners() {
        assert_eq!(classify_str("30569309025904"), CardNetwork::DinersClub);
        assert_eq!(classify_str("36700102000000"), CardNetwork::DinersClub);
        assert_eq!(classify_str("38520000023237"), CardNetwork::DinersClub);
    }

    #[test]
    fn test_classify_unionpay() {
        assert_eq!(classify_str("6200000000000005"), CardNetwork::UnionPay);
        // 17-19 digits
        assert_eq!(classify_str("62000000000000005"), CardNetwork::UnionPay);
        assert_eq!(classify_str("6200000000000000005"), CardNetwork::UnionPay);
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(classify_str("9999999999999999"), CardNetwork::Unknown);
        assert_eq!(classify_str("1234567812345678"), CardNetwork::Unknown);
        assert_eq!(classify(&[]), CardNetwork::Unknown);
    }

    #[test]
    fn test_first_match_wins() {
        // 62 is UnionPay even though 6x ranges appear in other rules; the
        // Discover rule (6011/644-649/65) must not swallow it.
        assert_eq!(classify(&digits("6211111111111110")), CardNetwork::UnionPay);
        // 65 at 16 digits is Discover, not UnionPay
        assert_eq!(classify(&digits("6511111111111119")), CardNetwork::Discover);
    }

    #[test]
    fn test_rule_for() {
        let rule = rule_for(CardNetwork::Amex).unwrap();
        assert_eq!(rule.cvv_length, 4);
        assert_eq!(rule.lengths, &[15]);
        assert!(rule_for(CardNetwork::Unknown).is_none());
    }

    #[test]
    fn test_classify_str_ignores_separators() {
        assert_eq!(classify_str("4111 1111 1111 1111"), CardNetwork::Visa);
        assert_eq!(classify_str("3782 822463 10005"), CardNetwork::Amex);
    }
}
