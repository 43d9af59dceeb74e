//! Fuzz target for card string parsing.
//!
//! Tests that parse() never panics on arbitrary input, and that a parsed
//! record answers every downstream question without panicking.

#![no_main]

use ccparser::parse;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Parsing arbitrary text must never panic
    if let Ok(card) = parse(data) {
        // Neither may anything computed from a successful parse
        let _ = card.formatted_number();
        let _ = card.masked_number();
        let _ = card.expiry();
        let _ = card.expiry_full();
        let _ = card.last_four();
        let _ = card.details();
        let report = card.validate_at(2026, 8);
        let _ = report.is_valid();

        // Structural invariants of a parsed record
        assert!((1..=12).contains(&card.month()));
        assert!(!card.number().is_empty());
        assert!(card.number().len() <= 19);
        assert!((1..=4).contains(&card.cvv_length()));
    }
});
