//! Demo 1: Hosted Checkout Flow
//!
//! Showcases: checkout initialization, status polling, closing
//!
//! Run: OPAY_MERCHANT_ID=... OPAY_PUBLIC_KEY=... OPAY_SECRET_KEY=... \
//!      cargo run --bin checkout_flow

use colored::*;
use opay_rest::{ConnectionClient, Params};
use serde_json::json;
use std::time::{SystemTime, UNIX_EPOCH};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("{}", "═".repeat(70).cyan());
    println!("{}", "  HOSTED CHECKOUT".cyan().bold());
    println!("{}", "  OPay SDK Demo - Initialize, query and close".cyan());
    println!("{}", "═".repeat(70).cyan());
    println!();

    let client = ConnectionClient::from_env()?;
    println!("{} Using {}\n", "✓".green(), client.base_url());

    let reference = format!(
        "DEMO-{}",
        SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis()
    );

    let params = Params::new()
        .with("reference", reference.as_str())
        .with("mchShortName", "Demo Shop")
        .with("productName", "Sneakers")
        .with("productDesc", "Red running shoes")
        .with("userPhone", "+2348000000000")
        .with("userRequestIp", "127.0.0.1")
        .with("amount", "50000")
        .with("currency", "NGN")
        .with("payTypes", json!(["BalancePayment", "BonusPayment"]))
        .with("payMethods", json!(["account", "qrcode"]))
        .with("callbackUrl", "https://example.com/callback")
        .with("returnUrl", "https://example.com/return")
        .with("expireAt", "10");

    let cashout = client.cashout();

    let initialized = cashout.initialize_transaction(&params).await?;
    print_step("initialize", &initialized);

    let lookup = Params::new().with("reference", reference.as_str());

    let status = cashout.transaction_status(&lookup).await?;
    print_step("status", &status);

    let closed = cashout.close_transaction(&lookup).await?;
    print_step("close", &closed);

    println!("\n{} Demo complete.", "✓".green());
    Ok(())
}

fn print_step(name: &str, response: &opay_rest::ApiResponse) {
    let marker = if response.is_success() {
        "✓".green()
    } else {
        "✗".red()
    };
    println!(
        "  {} {:<12} {} {}",
        marker,
        name.white().bold(),
        response.code().unwrap_or("-").yellow(),
        response.message().unwrap_or("").dimmed()
    );
    if let Some(data) = response.data() {
        println!("    {}", data.to_string().dimmed());
    }
}
