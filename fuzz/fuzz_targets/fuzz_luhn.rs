//! Fuzz target for the Luhn algorithm.
//!
//! Tests that luhn functions never panic and maintain invariants.

#![no_main]

use ccparser::luhn;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Clamp values to valid digit range
    let digits: Vec<u8> = data.iter().map(|&b| b % 10).collect();

    if digits.is_empty() {
        return;
    }

    let _ = luhn::validate(&digits);

    let check = luhn::check_digit(&digits);
    assert!(check <= 9, "check digit should be 0-9");

    // Appending the check digit must produce a valid number
    let mut with_check = digits.clone();
    with_check.push(check);
    assert!(
        luhn::validate(&with_check),
        "appending check digit should make valid"
    );
});
