//! Demo 2: Bank Payout
//!
//! Showcases: supported banks lookup, account-name resolution, bank transfer
//!
//! Run: cargo run --bin bank_payout -- <bankCode> <accountNumber> <amount>

use colored::*;
use opay_rest::{ConnectionClient, Params, RestError};
use serde_json::json;
use std::time::{SystemTime, UNIX_EPOCH};

const COUNTRY: &str = "NG";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 4 {
        eprintln!("usage: bank_payout <bankCode> <accountNumber> <amount>");
        std::process::exit(2);
    }
    let (bank_code, account_number, amount) = (&args[1], &args[2], &args[3]);

    println!("{}", "═".repeat(70).cyan());
    println!("{}", "  BANK PAYOUT".cyan().bold());
    println!("{}", "═".repeat(70).cyan());
    println!();

    let client = ConnectionClient::from_env()?;

    let banks = client
        .bank_transfer()
        .supported_banks(&Params::new().with("countryCode", COUNTRY))
        .await?;
    let bank_count = banks
        .data()
        .and_then(|d| d.as_array())
        .map(|a| a.len())
        .unwrap_or(0);
    println!("{} {} banks supported in {}", "✓".green(), bank_count, COUNTRY);

    let resolved = client
        .verification()
        .resolve_account_name(
            &Params::new()
                .with("bankCode", bank_code.as_str())
                .with("bankAccountNo", account_number.as_str())
                .with("countryCode", COUNTRY),
        )
        .await?;

    let account_name = match resolved.into_result() {
        Ok(data) => data["accountName"].as_str().unwrap_or_default().to_string(),
        Err(e) => {
            eprintln!("{} Could not resolve account: {}", "✗".red(), e);
            return Err(RestError::from(e).into());
        }
    };
    println!("{} Account holder: {}", "✓".green(), account_name.bold());

    let reference = format!(
        "PAYOUT-{}",
        SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis()
    );

    let transfer = client
        .bank_transfer()
        .transfer(
            &Params::new()
                .with("reference", reference.as_str())
                .with("amount", amount.as_str())
                .with("currency", "NGN")
                .with("country", COUNTRY)
                .with("reason", "demo payout")
                .with(
                    "receiver",
                    json!({
                        "name": account_name,
                        "bankCode": bank_code,
                        "bankAccountNumber": account_number
                    }),
                ),
        )
        .await?;

    println!(
        "{} Transfer {}: {} {}",
        "→".cyan(),
        reference,
        transfer.code().unwrap_or("-").yellow(),
        transfer.message().unwrap_or("")
    );

    let status = client
        .bank_transfer()
        .transfer_status(&Params::new().with("reference", reference.as_str()))
        .await?;
    if let Some(data) = status.data() {
        println!("{} Status: {}", "→".cyan(), data["status"]);
    }

    Ok(())
}
