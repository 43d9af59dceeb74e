//! Luhn checksum algorithm.
//!
//! The Luhn ("modulus 10") algorithm validates card numbers of any supported
//! length (13-19 digits here, though the math works for any length): starting
//! from the rightmost digit, every second digit moving left is doubled, with
//! 9 subtracted from doubled values above 9, and the number is valid iff the
//! digit sum is divisible by 10.

/// Doubled-digit lookup: `DOUBLE[d]` is `2*d`, minus 9 when that exceeds 9.
/// Avoids the branch in the inner loop.
const DOUBLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Computes the Luhn sum for a full number (check digit included).
///
/// The rightmost digit is position 0 and is not doubled.
#[inline]
pub fn checksum(digits: &[u8]) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 1 {
                DOUBLE[d as usize] as u32
            } else {
                d as u32
            }
        })
        .sum()
}

/// Validates a full card number.
///
/// # Example
///
/// ```
/// use ccparser::luhn::validate;
///
/// let digits = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert!(validate(&digits));
///
/// let invalid = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2];
/// assert!(!validate(&invalid));
/// ```
#[inline]
pub fn validate(digits: &[u8]) -> bool {
    !digits.is_empty() && checksum(digits) % 10 == 0
}

/// Computes the check digit for a partial number (all digits except the
/// last), using the closed-form `(10 - sum % 10) % 10`.
///
/// In the final number every given digit shifts one position left, so the
/// doubling parity is inverted relative to [`checksum`].
///
/// # Example
///
/// ```
/// use ccparser::luhn::check_digit;
///
/// let partial = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert_eq!(check_digit(&partial), 1);
/// ```
#[inline]
pub fn check_digit(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            // Position in the final number is i+1, so even i gets doubled.
            if i % 2 == 0 {
                DOUBLE[d as usize] as u32
            } else {
                d as u32
            }
        })
        .sum();

    ((10 - (sum % 10)) % 10) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_valid_numbers() {
        // Visa
        assert!(validate(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]));
        assert!(validate(&[4, 0, 1, 2, 8, 8, 8, 8, 8, 8, 8, 8, 1, 8, 8, 1]));
        // 13-digit Visa
        assert!(validate(&[4, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2]));
        // MasterCard
        assert!(validate(&[5, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 4]));
        // AMEX
        assert!(validate(&[3, 7, 8, 2, 8, 2, 2, 4, 6, 3, 1, 0, 0, 0, 5]));
        // Diners Club
        assert!(validate(&[3, 0, 5, 6, 9, 3, 0, 9, 0, 2, 5, 9, 0, 4]));
    }

    #[test]
    fn test_known_invalid_numbers() {
        // Last digit off by one
        assert!(!validate(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2]));
        // First digit changed
        assert!(!validate(&[5, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]));
        assert!(!validate(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1, 2, 3, 4, 5, 6]));
    }

    #[test]
    fn test_check_digit() {
        // Visa
        let partial = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
        assert_eq!(check_digit(&partial), 1);

        // MasterCard
        let partial = [5, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        assert_eq!(check_digit(&partial), 4);

        // AMEX
        let partial = [3, 7, 8, 2, 8, 2, 2, 4, 6, 3, 1, 0, 0, 0];
        assert_eq!(check_digit(&partial), 5);
    }

    #[test]
    fn test_check_digit_round_trip() {
        let partials: [&[u8]; 3] = [
            &[4, 0, 1, 2, 8, 8, 8, 8, 8, 8, 8, 8, 1, 8, 8],
            &[6, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
            &[6, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        ];
        for partial in partials {
            let mut full = partial.to_vec();
            full.push(check_digit(partial));
            assert!(validate(&full), "check digit should complete {:?}", partial);
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(!validate(&[]));
    }

    #[test]
    fn test_single_digit() {
        assert!(validate(&[0]));
        assert!(!validate(&[1]));
        assert!(!validate(&[5]));
    }

    #[test]
    fn test_double_table() {
        for d in 0..10u8 {
            let doubled = d * 2;
            let expected = if doubled > 9 { doubled - 9 } else { doubled };
            assert_eq!(DOUBLE[d as usize], expected);
        }
    }
}
