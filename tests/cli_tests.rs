//! End-to-end tests for the `cardtool` binary.

#![cfg(feature = "cli")]

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn cardtool() -> Command {
    Command::new(cargo_bin!("cardtool"))
}

#[test]
fn test_verify_valid_number() -> Result<(), Box<dyn std::error::Error>> {
    cardtool()
        .args(["--verify", "--number", "4111-1111 1111 1111"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Valid credit card number."));
    Ok(())
}

#[test]
fn test_verify_invalid_number() -> Result<(), Box<dyn std::error::Error>> {
    cardtool()
        .args(["-v", "-n", "4111111111111112"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Invalid credit card number."));
    Ok(())
}

#[test]
fn test_verify_malformed_number() -> Result<(), Box<dyn std::error::Error>> {
    cardtool()
        .args(["-v", "-n", "12345"])
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Error:"))
        .stdout(predicate::str::contains("between 13 and 19"));
    Ok(())
}

#[test]
fn test_verify_requires_number() -> Result<(), Box<dyn std::error::Error>> {
    cardtool()
        .arg("--verify")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required for verification"));
    Ok(())
}

#[test]
fn test_mode_is_required() -> Result<(), Box<dyn std::error::Error>> {
    cardtool().assert().failure();
    cardtool().args(["-v", "-g"]).assert().failure();
    Ok(())
}

#[test]
fn test_generate_amex() -> Result<(), Box<dyn std::error::Error>> {
    cardtool()
        .args(["--generate", "--type", "AMEX"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\d{4}-\d{6}-\d{5}\n$")?);
    Ok(())
}

#[test]
fn test_generate_count() -> Result<(), Box<dyn std::error::Error>> {
    let output = cardtool()
        .args(["-g", "-t", "visa", "-c", "3"])
        .output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    for line in lines {
        assert_eq!(luhn_card::verify(line), Ok(true), "{}", line);
    }
    Ok(())
}

#[test]
fn test_generate_random_type() -> Result<(), Box<dyn std::error::Error>> {
    cardtool()
        .arg("-g")
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^(\d{4}-\d{4}-\d{4}-\d{4}|\d{4}-\d{6}-\d{5})\n$",
        )?);
    Ok(())
}

#[test]
fn test_generate_unsupported_type() -> Result<(), Box<dyn std::error::Error>> {
    cardtool()
        .args(["-g", "-t", "discover"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Error: invalid card type 'discover'. Supported types are visa, mastercard, amex",
        ));
    Ok(())
}

#[test]
fn test_generate_json() -> Result<(), Box<dyn std::error::Error>> {
    let output = cardtool()
        .args(["-g", "-t", "mastercard", "--json"])
        .output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["card_type"], "mastercard");
    let number = value["number"].as_str().unwrap_or_default();
    assert_eq!(luhn_card::verify(number), Ok(true));
    Ok(())
}

#[test]
fn test_verify_json_masks_number() -> Result<(), Box<dyn std::error::Error>> {
    cardtool()
        .args(["-v", "-n", "4111111111111111", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""valid":true"#))
        .stdout(predicate::str::contains("************1111"))
        .stdout(predicate::str::contains("4111111111111111").not());
    Ok(())
}
