//! Fuzz target for network classification.
//!
//! Classification is total: any digit slice maps to exactly one network, and
//! a non-Unknown answer always satisfies that network's length rule.

#![no_main]

use ccparser::{detect, CardNetwork};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let digits: Vec<u8> = data.iter().map(|&b| b % 10).collect();

    let network = detect::classify(&digits);
    if network != CardNetwork::Unknown {
        assert!(
            network.is_valid_length(digits.len()),
            "{:?} classified at unsupported length {}",
            network,
            digits.len()
        );
    }

    // The string entry point must agree after digit filtering
    let as_string: String = digits.iter().map(|&d| (b'0' + d) as char).collect();
    assert_eq!(detect::classify_str(&as_string), network);
});
