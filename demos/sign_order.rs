//! Sign an order and build auth headers without touching the network.
//!
//! Run with:
//! ```
//! WALLET_PRIVATE_KEY=0x... cargo run --example sign_order
//! ```

use std::str::FromStr;

use rust_decimal::Decimal;

use polymarket_signing::client::SigningClient;
use polymarket_signing::config::POLYGON_CHAIN_ID;
use polymarket_signing::signing::OrderSigner;
use polymarket_signing::types::{
    parse_token_id, ApiCredentials, CreateOrderOptions, OrderArgs, OrderSide, RequestArgs,
    TickSize,
};

const SAMPLE_TOKEN_ID: &str =
    "71321045679252212594626385532706912750332728571942532289631379312455583992563";

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt().with_env_filter("info").init();

    println!("=== Order Signing Demo ===\n");

    // Step 1: Load wallet from environment
    println!("1. Loading wallet from WALLET_PRIVATE_KEY...");
    let signer = match OrderSigner::from_env(POLYGON_CHAIN_ID) {
        Ok(s) => {
            println!("   ✓ Wallet loaded successfully");
            println!("   Address: {}", s.address());
            s
        }
        Err(e) => {
            println!("   ✗ Failed to load wallet: {}", e);
            println!("\n   Make sure WALLET_PRIVATE_KEY is set:");
            println!("   export WALLET_PRIVATE_KEY=0x...");
            return Err(e.into());
        }
    };

    let mut client = SigningClient::new(POLYGON_CHAIN_ID).with_signer(signer);

    // Step 2: Build and sign a limit order
    println!("\n2. Building a limit order (BUY 20 @ 0.55)...");
    let args = OrderArgs::new(
        parse_token_id(SAMPLE_TOKEN_ID)?,
        Decimal::from_str("0.55")?,
        Decimal::from(20u64),
        OrderSide::Buy,
    );
    let options = CreateOrderOptions::new(TickSize::Hundredth, false);

    let signed = client.create_order(&args, &options)?;
    println!("   ✓ Order signed");
    println!("   Maker amount: {} (USDC base units)", signed.maker_amount);
    println!("   Taker amount: {} (token base units)", signed.taker_amount);
    println!(
        "   Signature: {}...{}",
        &signed.signature[..10],
        &signed.signature[signed.signature.len() - 8..]
    );
    println!("\n   Wire JSON:\n{}", serde_json::to_string_pretty(&signed)?);

    // Step 3: Build L1 authentication headers
    println!("\n3. Building L1 auth headers (API key derivation)...");
    let headers = client.l1_auth_headers(0)?;
    println!("   ✓ Headers ready");
    for (name, value) in &headers {
        println!("   {}: {}", name, value);
    }

    // Step 4: Build L2 headers if API credentials are configured
    println!("\n4. Building L2 auth headers (trading endpoints)...");
    match ApiCredentials::from_env() {
        Ok(credentials) => {
            client = client.with_credentials(credentials);
            let request = RequestArgs::new("GET", "/orders");
            let headers = client.l2_auth_headers(&request)?;
            println!("   ✓ Headers ready");
            for (name, value) in &headers {
                println!("   {}: {}", name, value);
            }
        }
        Err(e) => {
            println!("   ⚠ Skipped: {}", e);
            println!("   Set POLY_API_KEY, POLY_API_SECRET and POLY_API_PASSPHRASE to enable.");
        }
    }

    println!("\n=== Demo Complete ===");
    Ok(())
}
