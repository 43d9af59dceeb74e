//! # ccparser
//!
//! Parse, validate, and format loosely-delimited credit card strings.
//!
//! A card string carries a number, an expiry, and a CVV separated by `|`,
//! `:`, or whitespace. Parsing extracts the fields, classifies the network,
//! and returns an immutable [`CardRecord`] that answers validation and
//! display questions.
//!
//! ## Quick start
//!
//! ```rust
//! use ccparser::{parse, CardNetwork};
//!
//! let card = parse("4111111111111111|12/30|123").unwrap();
//! assert_eq!(card.network(), CardNetwork::Visa);
//! assert_eq!(card.formatted_number(), "4111 1111 1111 1111");
//! assert_eq!(card.expiry(), "12/30");
//!
//! // Safe for logging - never exposes the full number
//! println!("{}", card.masked_number()); // "**** **** **** 1111"
//! ```
//!
//! All of these parse to the same record:
//!
//! ```rust
//! use ccparser::parse;
//!
//! let a = parse("4111111111111111|12/30|123").unwrap();
//! let b = parse("4111111111111111:12:30:123").unwrap();
//! let c = parse("4111111111111111 12 2030 123").unwrap();
//! assert_eq!(a.number(), b.number());
//! assert_eq!(b.year(), c.year());
//! ```
//!
//! ## Validation
//!
//! Four independent checks: Luhn checksum, expiry, CVV length for the
//! network, number length for the network. The current date is injectable
//! so validation stays deterministic:
//!
//! ```rust
//! use ccparser::parse;
//!
//! let card = parse("4111111111111111|12/30|123").unwrap();
//! let report = card.validate_at(2026, 8);
//! assert!(report.luhn_valid);
//! assert!(report.expiry_valid);
//! assert!(report.is_valid());
//! ```
//!
//! ## Generation
//!
//! The reverse path: a network name in, a Luhn-valid synthetic number out.
//!
//! ```rust
//! use ccparser::{generate::generate_for_name, detect::classify_str, CardNetwork};
//!
//! let number = generate_for_name("Visa").unwrap();
//! assert_eq!(classify_str(&number), CardNetwork::Visa);
//! ```
//!
//! ## Supported networks
//!
//! | Network | Prefix | Length | CVV |
//! |---------|--------|--------|-----|
//! | Visa | 4 | 13, 16 | 3 |
//! | MasterCard | 51-55 | 16 | 3 |
//! | AMEX | 34, 37 | 15 | 4 |
//! | Discover | 6011, 644-649, 65 | 16 | 3 |
//! | JCB | 2131, 1800, 35 | 15, 16 | 3 |
//! | Diners Club | 300-305, 36, 38 | 14 | 3 |
//! | UnionPay | 62 | 16-19 | 3 |
//!
//! ## Security
//!
//! - Number and CVV digits are stored in fixed-size arrays and zeroized on
//!   drop
//! - `Debug` and `Display` for [`CardRecord`] show masked numbers only
//! - No network calls, no persistence, no unsafe code
//!   (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod card;
pub mod detect;
pub mod error;
pub mod format;
pub mod generate;
pub mod luhn;
pub mod mask;
pub mod parse;
pub mod validate;

// Re-export main types at crate root
pub use card::{CardNetwork, CardRecord, MAX_CVV_DIGITS, MAX_NUMBER_DIGITS};
pub use detect::classify;
pub use error::{GenerateError, ParseError};
pub use format::CardDetails;
pub use parse::parse;
pub use validate::ValidationReport;
