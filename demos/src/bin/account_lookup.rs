//! Demo 3: Account Lookup
//!
//! Showcases: balance inquiry, user and merchant validation, supported countries
//!
//! Run: cargo run --bin account_lookup -- <phoneNumber> [merchantEmail]

use colored::*;
use opay_rest::{ApiResponse, ConnectionClient, Params};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let phone = args.next().unwrap_or_else(|| "+2348000000000".to_string());
    let email = args.next();

    let client = ConnectionClient::from_env()?;
    let inquiry = client.inquiry();

    println!("{}", "BALANCES".white().bold());
    let balance = inquiry.balance(&Params::new()).await?;
    show(&balance);

    println!("\n{}", "USER".white().bold());
    let user = inquiry
        .validate_user(&Params::new().with("phoneNumber", phone.as_str()))
        .await?;
    show(&user);

    if let Some(email) = email {
        println!("\n{}", "MERCHANT".white().bold());
        let merchant = inquiry
            .validate_merchant(&Params::new().with("email", email.as_str()))
            .await?;
        show(&merchant);
    }

    println!("\n{}", "COUNTRIES".white().bold());
    let countries = client
        .bank_transfer()
        .supported_countries(&Params::new())
        .await?;
    show(&countries);

    Ok(())
}

fn show(response: &ApiResponse) {
    if response.is_success() {
        let data = response
            .data()
            .and_then(|d| serde_json::to_string_pretty(d).ok())
            .unwrap_or_default();
        println!("{}", data);
    } else {
        println!(
            "  {} {} {}",
            "✗".red(),
            response.code().unwrap_or("-"),
            response.message().unwrap_or("")
        );
    }
}
