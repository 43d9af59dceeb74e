//! Error types for parsing and generation.
//!
//! Parsing is all-or-nothing: any malformed field fails the whole call with a
//! `ParseError` describing which field was bad. There are no retries anywhere;
//! the same input always fails the same way.

use std::fmt;

/// Errors that can occur while parsing a card string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input string was empty or all whitespace.
    Empty,

    /// The input did not split into 3 or 4 fields.
    InvalidFieldCount {
        /// How many non-empty fields were found.
        found: usize,
    },

    /// The card number field contained a non-digit character.
    InvalidNumber,

    /// The card number field had no digits or more than 19.
    InvalidNumberLength {
        /// The number of digits found.
        length: usize,
    },

    /// The expiry field was not `MM/YY`, `MM/YYYY`, `MM-YY`, or `MM-YYYY`.
    InvalidExpiryFormat,

    /// The month field was non-numeric or outside 1-12.
    InvalidMonth {
        /// The offending month field.
        field: String,
    },

    /// The year field was not 2 or 4 digits.
    InvalidYear {
        /// The offending year field.
        field: String,
    },

    /// The CVV field was not 1-4 digits.
    InvalidCvv,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "card string cannot be empty"),

            Self::InvalidFieldCount { found } => {
                write!(
                    f,
                    "invalid card string format: got {} fields, expected NUMBER|MM|YYYY|CVV or NUMBER|MM/YY|CVV",
                    found
                )
            }

            Self::InvalidNumber => {
                write!(f, "card number must contain only digits")
            }

            Self::InvalidNumberLength { length } => {
                write!(
                    f,
                    "card number has {} digits, expected between 1 and 19",
                    length
                )
            }

            Self::InvalidExpiryFormat => {
                write!(f, "invalid expiry date format, use MM/YY or MM/YYYY")
            }

            Self::InvalidMonth { field } => {
                write!(f, "invalid month '{}': must be 01-12", field)
            }

            Self::InvalidYear { field } => {
                write!(f, "invalid year '{}': use YY or YYYY format", field)
            }

            Self::InvalidCvv => {
                write!(f, "CVV must be 1-4 digits")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Errors that can occur while generating a card number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The requested network name is not one the generator supports.
    UnsupportedNetwork {
        /// The name as given by the caller.
        name: String,
    },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedNetwork { name } => {
                write!(
                    f,
                    "unsupported card network: '{}'. Supported networks: {}",
                    name,
                    crate::generate::supported_networks().join(", ")
                )
            }
        }
    }
}

impl std::error::Error for GenerateError {}
