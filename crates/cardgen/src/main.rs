//! # Cardgen - Batch Card Number Generator
//!
//! Generates Luhn-valid synthetic card numbers from a masked BIN pattern
//! and writes them in the `number|MM|YY|CVV` line format.
//!
//! ## Usage
//! ```bash
//! # Ten cards with a random expiry
//! cardgen --pattern 453900xxxxxxxxx
//!
//! # Fifty cards with a fixed expiry, written to a file
//! cardgen -p 453900xxxxxxxxx -c 50 -m 04 -y 27 --output cards.txt
//! ```

use std::path::PathBuf;

use clap::Parser;

use cardmint_common::constants::{DEFAULT_RANDOM_YEAR_MAX, DEFAULT_RANDOM_YEAR_MIN};
use cardmint_common::{BatchReport, CardAssembler, Expiry, MaskedPattern};

/// Cardmint batch generator
#[derive(Parser, Debug)]
#[command(name = "cardgen")]
#[command(author, version, about = "Generate Luhn-valid synthetic card numbers", long_about = None)]
struct Args {
    /// Masked BIN pattern; 'x' marks a randomized digit
    #[arg(short, long, default_value = "453900xxxxxxxx")]
    pattern: String,

    /// Number of cards to generate
    #[arg(short, long, default_value = "10")]
    count: u32,

    /// Two-digit expiry month (random if omitted)
    #[arg(short, long, requires = "year")]
    month: Option<String>,

    /// Two-digit expiry year (random if omitted)
    #[arg(short, long, requires = "month")]
    year: Option<String>,

    /// Resolution attempts allowed per requested card
    #[arg(long, default_value = "10")]
    attempt_multiplier: u32,

    /// Write records to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit the batch as a JSON array instead of record lines
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();

    let pattern = match MaskedPattern::parse(&args.pattern) {
        Ok(pattern) => pattern,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let expiry = match (&args.month, &args.year) {
        (Some(month), Some(year)) => match Expiry::parse(month, year) {
            Ok(expiry) => expiry,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        _ => Expiry::random(
            &mut rand::rng(),
            DEFAULT_RANDOM_YEAR_MIN,
            DEFAULT_RANDOM_YEAR_MAX,
        ),
    };

    let assembler = CardAssembler::new(args.attempt_multiplier);
    let report = match assembler.generate_batch(&pattern, args.count, &expiry) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if report.cards.is_empty() {
        eprintln!("No valid cards produced after {} attempts", report.attempts);
        std::process::exit(2); // Exit code 2 = budget exhausted
    }

    let rendered = render(&report, args.json);

    match &args.output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, format!("{rendered}\n")) {
                eprintln!("Error writing {}: {e}", path.display());
                std::process::exit(1);
            }
            eprintln!("Wrote {} cards to {}", report.cards.len(), path.display());
        }
        None => println!("{rendered}"),
    }

    eprintln!(
        "Generated: {} | Attempts: {} | Success rate: {:.1}%",
        report.cards.len(),
        report.attempts,
        (report.cards.len() as f64 / report.attempts.max(1) as f64) * 100.0
    );
}

/// Render the batch as record lines or a JSON array
fn render(report: &BatchReport, json: bool) -> String {
    if json {
        serde_json::to_string_pretty(&report.cards).unwrap_or_default()
    } else {
        report.to_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardmint_common::CardRecord;

    #[test]
    fn test_render_lines_and_json() {
        let expiry = Expiry::parse("01", "25").unwrap();
        let report = BatchReport {
            cards: vec![CardRecord::new(
                "4539000000000002".to_string(),
                expiry,
                321,
            )],
            attempts: 1,
        };

        assert_eq!(render(&report, false), "4539000000000002|01|25|321");

        let json = render(&report, true);
        assert!(json.contains("\"number\": \"4539000000000002\""));
        assert!(json.contains("\"cvv\": \"321\""));
    }
}
