//! CLI for parsing and validating card strings.
//!
//! # Usage
//!
//! ```bash
//! # Parse and validate a card string
//! ccparser "4111111111111111|12/30|123"
//!
//! # Masked output
//! ccparser --masked "4111111111111111|12/30|123"
//!
//! # JSON output
//! ccparser --json "4111111111111111|12/30|123"
//!
//! # Exit code only (0 valid, 1 invalid)
//! ccparser --quiet "4111111111111111|12/30|123"
//! ```
//!
//! The exit code is non-zero on parse failure and zero otherwise, except in
//! quiet mode where it reflects overall validity.

use ccparser::parse;
use clap::Parser;

#[derive(Parser)]
#[command(name = "ccparser")]
#[command(
    version,
    about = "Parse, validate, and format credit card strings",
    after_help = "Example: ccparser '4111111111111111|12|2030|123'"
)]
struct Cli {
    /// Card string to parse (NUMBER|MM|YYYY|CVV or NUMBER|MM/YY|CVV)
    card_string: String,

    /// Show the masked card number instead of the full number
    #[arg(short, long)]
    masked: bool,

    /// Output in JSON format
    #[arg(short, long)]
    json: bool,

    /// No output; exit code 0 if valid, 1 if invalid
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    std::process::exit(run(&Cli::parse()));
}

fn run(cli: &Cli) -> i32 {
    let card = match parse(&cli.card_string) {
        Ok(card) => card,
        Err(err) => {
            if cli.quiet {
                return 1;
            }
            if cli.json {
                println!("{}", serde_json::json!({ "error": err.to_string() }));
            } else {
                eprintln!("Error: {}", err);
            }
            return 1;
        }
    };

    if cli.quiet {
        return i32::from(!card.is_valid());
    }

    if cli.json {
        let mut details = match serde_json::to_value(card.details()) {
            Ok(details) => details,
            Err(err) => {
                eprintln!("Error: {}", err);
                return 1;
            }
        };
        if cli.masked {
            details["number"] = details["masked_number"].clone();
        }
        match serde_json::to_string_pretty(&details) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("Error: {}", err);
                return 1;
            }
        }
        return 0;
    }

    if cli.masked {
        println!("Card Number: {}", card.masked_number());
    } else {
        println!("Card Number: {}", card.formatted_number());
    }
    println!("Expiry Date: {}", card.expiry());
    println!("CVV: {}", card.cvv());
    println!("Network: {}", card.network());
    println!("Valid: {}", card.is_valid());

    0
}
