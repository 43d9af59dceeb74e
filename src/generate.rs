//! Synthetic card number generation.
//!
//! Generates digit strings that match a network's prefix/length rules and
//! pass the Luhn check. The numbers are mathematically valid but not
//! connected to any real account; they exist for testing.
//!
//! The random source is injectable: [`generate`] uses the thread-local RNG,
//! [`generate_with_rng`] takes any [`Rng`] for seeded, reproducible output.

use crate::card::CardNetwork;
use crate::error::GenerateError;
use crate::luhn;
use rand::Rng;

/// IIN prefixes the generator draws from, per network.
const fn prefixes(network: CardNetwork) -> &'static [&'static str] {
    match network {
        CardNetwork::Visa => &["4"],
        CardNetwork::MasterCard => &["51", "52", "53", "54", "55"],
        CardNetwork::Amex => &["34", "37"],
        CardNetwork::Discover => &["6011", "644", "645", "646", "647", "648", "649", "65"],
        CardNetwork::Jcb => &["3528", "3529", "353", "354", "355", "356", "357", "358"],
        CardNetwork::DinersClub => &["300", "301", "302", "303", "304", "305", "36", "38"],
        CardNetwork::UnionPay => &["62"],
        CardNetwork::Unknown => &[],
    }
}

/// Generated number length per network (the most common length where the
/// network allows several).
const fn generated_length(network: CardNetwork) -> usize {
    match network {
        CardNetwork::Amex => 15,
        CardNetwork::DinersClub => 14,
        _ => 16,
    }
}

/// Generates a Luhn-valid number for the given network using the
/// thread-local RNG.
///
/// # Example
///
/// ```
/// use ccparser::{generate::generate, detect::classify_str, CardNetwork};
///
/// let number = generate(CardNetwork::Visa).unwrap();
/// assert_eq!(number.len(), 16);
/// assert!(number.starts_with('4'));
/// assert_eq!(classify_str(&number), CardNetwork::Visa);
/// ```
pub fn generate(network: CardNetwork) -> Result<String, GenerateError> {
    generate_with_rng(network, &mut rand::thread_rng())
}

/// Generates a Luhn-valid number using the provided RNG.
///
/// Seed the RNG for reproducible output.
pub fn generate_with_rng<R: Rng>(
    network: CardNetwork,
    rng: &mut R,
) -> Result<String, GenerateError> {
    let prefix_pool = prefixes(network);
    if prefix_pool.is_empty() {
        return Err(GenerateError::UnsupportedNetwork {
            name: network.name().to_string(),
        });
    }

    let prefix = prefix_pool[rng.gen_range(0..prefix_pool.len())];
    let length = generated_length(network);

    let mut digits: Vec<u8> = prefix.bytes().map(|b| b - b'0').collect();
    while digits.len() < length - 1 {
        digits.push(rng.gen_range(0..10));
    }
    digits.push(luhn::check_digit(&digits));

    Ok(digits.iter().map(|&d| (b'0' + d) as char).collect())
}

/// Generates a number for a network given by name (case-insensitive).
///
/// This is the string entry point used by the CLI; unknown names fail with
/// [`GenerateError::UnsupportedNetwork`].
///
/// # Example
///
/// ```
/// use ccparser::generate::generate_for_name;
///
/// let number = generate_for_name("AMEX").unwrap();
/// assert_eq!(number.len(), 15);
///
/// assert!(generate_for_name("Maestro").is_err());
/// ```
pub fn generate_for_name(name: &str) -> Result<String, GenerateError> {
    let network = CardNetwork::from_name(name).ok_or_else(|| GenerateError::UnsupportedNetwork {
        name: name.to_string(),
    })?;
    generate(network)
}

/// Returns the sorted list of network names the generator supports.
pub fn supported_networks() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = CardNetwork::SUPPORTED.iter().map(|n| n.name()).collect();
    names.sort_unstable();
    names
}
