//! CLI tool for card number verification and generation.
//!
//! # Usage
//!
//! ```bash
//! # Verify a card number
//! cardtool --verify --number "4111-1111-1111-1111"
//!
//! # Generate a number of a given type
//! cardtool --generate --type amex
//!
//! # Generate five numbers of random types as JSON lines
//! cardtool -g -c 5 --json
//! ```
//!
//! Exit status is 0 for a valid number or successful generation and 1 for an
//! invalid number or any error. Set `RUST_LOG=debug` for diagnostics on
//! stderr.

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{ArgGroup, CommandFactory, Parser};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use luhn_card::{generate_for_type_with_rng, mask, verify, CardType, ValidationError};

#[derive(Parser)]
#[command(name = "cardtool")]
#[command(
    author,
    version,
    about = "Credit card validation and generation tool"
)]
#[command(group(ArgGroup::new("mode").required(true).args(["verify", "generate"])))]
struct Cli {
    /// Verify a credit card number
    #[arg(short, long)]
    verify: bool,

    /// Generate credit card numbers
    #[arg(short, long)]
    generate: bool,

    /// Credit card number to verify (spaces and dashes allowed)
    #[arg(short, long)]
    number: Option<String>,

    /// Card type to generate: visa, mastercard or amex (random if omitted)
    #[arg(short = 't', long = "type")]
    card_type: Option<String>,

    /// Number of cards to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct VerifyOutput {
    valid: bool,
    masked: String,
}

#[derive(Serialize)]
struct GenerateOutput {
    card_type: CardType,
    number: String,
}

#[derive(Serialize)]
struct ErrorOutput {
    error: String,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = if cli.verify {
        match cli.number.as_deref() {
            Some(number) => cmd_verify(number, cli.json),
            None => Cli::command()
                .error(
                    ErrorKind::MissingRequiredArgument,
                    "Credit card number is required for verification.",
                )
                .exit(),
        }
    } else {
        cmd_generate(cli.card_type.as_deref(), cli.count, cli.json)
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            if cli.json {
                print_json(&ErrorOutput {
                    error: e.to_string(),
                });
            } else {
                println!("Error: {}", e);
            }
            ExitCode::FAILURE
        }
    }
}

fn cmd_verify(number: &str, json: bool) -> Result<bool, ValidationError> {
    let valid = verify(number)?;
    debug!(number = %mask::mask_str(number), valid, "verify command");

    if json {
        print_json(&VerifyOutput {
            valid,
            masked: mask::mask_str(number),
        });
    } else if valid {
        println!("Valid credit card number.");
    } else {
        println!("Invalid credit card number.");
    }
    Ok(valid)
}

fn cmd_generate(
    card_type: Option<&str>,
    count: usize,
    json: bool,
) -> Result<bool, ValidationError> {
    let requested = card_type.map(str::parse::<CardType>).transpose()?;
    let mut rng = rand::thread_rng();

    for _ in 0..count {
        let card_type = requested.unwrap_or_else(|| CardType::random(&mut rng));
        let number = generate_for_type_with_rng(card_type, &mut rng)?;

        if json {
            print_json(&GenerateOutput { card_type, number });
        } else {
            println!("{}", number);
        }
    }
    debug!(count, "generate command");
    Ok(true)
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string(value) {
        Ok(line) => println!("{}", line),
        Err(e) => eprintln!("Error: failed to encode output: {}", e),
    }
}
