//! Fuzz target for formatting and masking.
//!
//! Tests that the display helpers never panic and that masking never leaks
//! more than the last four digits.

#![no_main]

use ccparser::{format, mask};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let formatted = format::format_card_number(data);
    let masked = mask::mask_card_number(data);
    let _ = format::format_with_separator(data, "-");
    let _ = mask::last_four(data);

    // Formatting keeps exactly the digits of the input, in order
    assert_eq!(
        format::strip_formatting(&formatted),
        format::strip_formatting(data)
    );

    // Masking reveals at most 4 digits of a digit-only input
    if data.bytes().all(|b| b.is_ascii_digit()) && data.len() > 4 {
        let visible = masked.chars().filter(char::is_ascii_digit).count();
        assert!(visible <= 4, "mask leaked {} digits", visible);
    }
});
