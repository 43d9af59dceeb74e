//! Field extraction: splitting a raw card string into number, expiry, and
//! CVV.
//!
//! Accepted shapes, with `|`, `:`, or runs of whitespace as delimiters in any
//! mix:
//!
//! - `4111111111111111|12/30|123`
//! - `4111111111111111|12|2030|123`
//! - `4111111111111111:12:30:123`
//! - `4111111111111111 12 2030 123`
//!
//! Two-digit years expand to `20YY`. All years are assumed to lie in
//! 2000-2099; there is no century rollover rule.

use crate::card::{CardNetwork, CardRecord, MAX_CVV_DIGITS, MAX_NUMBER_DIGITS};
use crate::detect::classify;
use crate::error::ParseError;

/// Parses a raw card string into a [`CardRecord`].
///
/// Pure function over the input; the record's network is classified at
/// construction and everything is immutable afterwards.
///
/// # Example
///
/// ```
/// use ccparser::{parse, CardNetwork};
///
/// let card = parse("4111111111111111|12/30|123").unwrap();
/// assert_eq!(card.network(), CardNetwork::Visa);
/// assert_eq!(card.month(), 12);
/// assert_eq!(card.year(), 2030);
/// assert_eq!(card.cvv(), "123");
/// ```
pub fn parse(raw: &str) -> Result<CardRecord, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let fields: Vec<&str> = trimmed
        .split(|c: char| c == '|' || c == ':' || c.is_whitespace())
        .filter(|f| !f.is_empty())
        .collect();

    let (number_field, month_field, year_field, cvv_field) = match fields.as_slice() {
        [number, expiry, cvv] => {
            let (month, year) = split_expiry(expiry)?;
            (*number, month, year, *cvv)
        }
        [number, month, year, cvv] => (*number, *month, *year, *cvv),
        _ => {
            return Err(ParseError::InvalidFieldCount {
                found: fields.len(),
            })
        }
    };

    let month = parse_month(month_field)?;
    let year = parse_year(year_field)?;
    let (digits, digit_count) = parse_number(number_field)?;
    let (cvv, cvv_count) = parse_cvv(cvv_field)?;

    let network = classify(&digits[..digit_count as usize]);

    Ok(CardRecord::new(
        trimmed.to_string(),
        digits,
        digit_count,
        month,
        year,
        cvv,
        cvv_count,
        network,
    ))
}

/// Splits a combined expiry field (`MM/YY`, `MM/YYYY`, or the `-` variants)
/// into month and year tokens.
fn split_expiry(expiry: &str) -> Result<(&str, &str), ParseError> {
    let (month, year) = expiry
        .split_once('/')
        .or_else(|| expiry.split_once('-'))
        .ok_or(ParseError::InvalidExpiryFormat)?;

    // A second separator means the field was not MM/YY(YY)
    if year.contains('/') || year.contains('-') {
        return Err(ParseError::InvalidExpiryFormat);
    }

    Ok((month, year))
}

fn parse_month(field: &str) -> Result<u8, ParseError> {
    let month: u8 = field.parse().map_err(|_| ParseError::InvalidMonth {
        field: field.to_string(),
    })?;

    if !(1..=12).contains(&month) {
        return Err(ParseError::InvalidMonth {
            field: field.to_string(),
        });
    }

    Ok(month)
}

fn parse_year(field: &str) -> Result<u16, ParseError> {
    let invalid = || ParseError::InvalidYear {
        field: field.to_string(),
    };

    if !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    match field.len() {
        // Single century assumption: YY always means 20YY
        2 => Ok(2000 + field.parse::<u16>().map_err(|_| invalid())?),
        4 => field.parse().map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

fn parse_number(field: &str) -> Result<([u8; MAX_NUMBER_DIGITS], u8), ParseError> {
    let mut digits = [0u8; MAX_NUMBER_DIGITS];
    let mut count = 0usize;

    for c in field.chars() {
        let d = c.to_digit(10).ok_or(ParseError::InvalidNumber)?;
        if count >= MAX_NUMBER_DIGITS {
            return Err(ParseError::InvalidNumberLength {
                length: field.chars().count(),
            });
        }
        digits[count] = d as u8;
        count += 1;
    }

    if count == 0 {
        return Err(ParseError::InvalidNumberLength { length: 0 });
    }

    Ok((digits, count as u8))
}

fn parse_cvv(field: &str) -> Result<([u8; MAX_CVV_DIGITS], u8), ParseError> {
    let mut digits = [0u8; MAX_CVV_DIGITS];
    let mut count = 0usize;

    for c in field.chars() {
        let d = c.to_digit(10).ok_or(ParseError::InvalidCvv)?;
        if count >= MAX_CVV_DIGITS {
            return Err(ParseError::InvalidCvv);
        }
        digits[count] = d as u8;
        count += 1;
    }

    if count == 0 {
        return Err(ParseError::InvalidCvv);
    }

    Ok((digits, count as u8))
}
