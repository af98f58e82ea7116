//! Shared types for order construction and CLOB authentication.

use std::fmt;
use std::str::FromStr;

use alloy_primitives::{Address, U256};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Order side (buy/sell).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderSide {
    Buy = 0,
    Sell = 1,
}

impl OrderSide {
    /// Get the numeric value for signing.
    pub fn as_u8(&self) -> u8 {
        match self {
            OrderSide::Buy => 0,
            OrderSide::Sell => 1,
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderSide::Buy => write!(f, "BUY"),
            OrderSide::Sell => write!(f, "SELL"),
        }
    }
}

impl FromStr for OrderSide {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "BUY" => Ok(OrderSide::Buy),
            "SELL" => Ok(OrderSide::Sell),
            other => Err(Error::InvalidSide(other.to_string())),
        }
    }
}

/// Signature scheme the exchange should use to verify the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignatureType {
    /// ECDSA signature from an externally-owned account.
    #[default]
    Eoa = 0,
    /// Signature verified against a Polymarket proxy wallet.
    PolyProxy = 1,
    /// Signature verified against a Polymarket Gnosis Safe wallet.
    PolyGnosisSafe = 2,
}

impl SignatureType {
    /// Get the numeric value for signing.
    pub fn as_u8(&self) -> u8 {
        match self {
            SignatureType::Eoa => 0,
            SignatureType::PolyProxy => 1,
            SignatureType::PolyGnosisSafe => 2,
        }
    }
}

/// Order type for submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// Good-till-cancelled limit order.
    #[default]
    Gtc,
    /// Fill-or-kill market order.
    Fok,
    /// Good-till-date limit order.
    Gtd,
    /// Fill-and-kill market order.
    Fak,
}

/// Minimum price increment a market accepts.
///
/// The tick size bounds the valid price range: a price is accepted only
/// within `[tick, 1 - tick]`. It also selects the rounding precision used
/// for order amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickSize {
    #[serde(rename = "0.1")]
    Tenth,
    #[serde(rename = "0.01")]
    Hundredth,
    #[serde(rename = "0.001")]
    Thousandth,
    #[serde(rename = "0.0001")]
    TenThousandth,
}

impl TickSize {
    /// The tick as an exact decimal value.
    pub fn as_decimal(&self) -> Decimal {
        match self {
            TickSize::Tenth => Decimal::new(1, 1),
            TickSize::Hundredth => Decimal::new(1, 2),
            TickSize::Thousandth => Decimal::new(1, 3),
            TickSize::TenThousandth => Decimal::new(1, 4),
        }
    }

    /// Whether this tick is a finer increment than `other`.
    ///
    /// Used when a market's minimum tick moves: an order built for a
    /// coarser tick stays valid, one built for a finer tick does not.
    pub fn is_finer_than(&self, other: TickSize) -> bool {
        self.as_decimal() < other.as_decimal()
    }
}

impl fmt::Display for TickSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TickSize::Tenth => write!(f, "0.1"),
            TickSize::Hundredth => write!(f, "0.01"),
            TickSize::Thousandth => write!(f, "0.001"),
            TickSize::TenThousandth => write!(f, "0.0001"),
        }
    }
}

impl FromStr for TickSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "0.1" => Ok(TickSize::Tenth),
            "0.01" => Ok(TickSize::Hundredth),
            "0.001" => Ok(TickSize::Thousandth),
            "0.0001" => Ok(TickSize::TenThousandth),
            other => Err(Error::InvalidTickSize(other.to_string())),
        }
    }
}

/// Caller intent for a new order.
///
/// `price` and `size` are human-readable decimals; the builder converts
/// them into base-unit maker/taker amounts.
#[derive(Debug, Clone)]
pub struct OrderArgs {
    /// ERC-1155 token ID of the outcome being traded.
    pub token_id: U256,
    /// Limit price in the range (0, 1).
    pub price: Decimal,
    /// Size in outcome tokens.
    pub size: Decimal,
    /// Buy or sell.
    pub side: OrderSide,
    /// Fee rate in basis points. Defaults to 0.
    pub fee_rate_bps: u64,
    /// Nonce for on-chain cancellations. Defaults to 0.
    pub nonce: u64,
    /// Expiration as unix seconds, 0 for no expiration. Defaults to 0.
    pub expiration: u64,
    /// Taker address, zero for a public order. Defaults to zero.
    pub taker: Address,
}

impl OrderArgs {
    /// Create order args with default fee, nonce, expiration and taker.
    pub fn new(token_id: U256, price: Decimal, size: Decimal, side: OrderSide) -> Self {
        Self {
            token_id,
            price,
            size,
            side,
            fee_rate_bps: 0,
            nonce: 0,
            expiration: 0,
            taker: Address::ZERO,
        }
    }
}

/// Market parameters needed to build an order.
#[derive(Debug, Clone, Copy)]
pub struct CreateOrderOptions {
    /// Minimum price increment of the market.
    pub tick_size: TickSize,
    /// Whether the market trades on the neg-risk exchange.
    pub neg_risk: bool,
}

impl CreateOrderOptions {
    pub fn new(tick_size: TickSize, neg_risk: bool) -> Self {
        Self {
            tick_size,
            neg_risk,
        }
    }
}

/// Parse a token ID from its decimal string form.
///
/// # Errors
///
/// Returns [`Error::MalformedAddressOrHash`] if the string is not an
/// unsigned decimal integer that fits in 256 bits.
pub fn parse_token_id(token_id: &str) -> Result<U256> {
    U256::from_str_radix(token_id, 10)
        .map_err(|_| Error::MalformedAddressOrHash(format!("invalid token id: {}", token_id)))
}

/// API credentials for L2-authenticated CLOB requests.
#[derive(Clone)]
pub struct ApiCredentials {
    /// API key (derived from wallet).
    pub api_key: String,
    /// API secret for HMAC signing, base64url-encoded.
    pub api_secret: String,
    /// Passphrase for additional security.
    pub api_passphrase: String,
}

impl fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_key", &"[REDACTED]")
            .field("api_secret", &"[REDACTED]")
            .field("api_passphrase", &"[REDACTED]")
            .finish()
    }
}

impl ApiCredentials {
    /// Create new API credentials.
    pub fn new(api_key: String, api_secret: String, api_passphrase: String) -> Self {
        Self {
            api_key,
            api_secret,
            api_passphrase,
        }
    }

    /// Load from the `POLY_API_KEY`, `POLY_API_SECRET` and
    /// `POLY_API_PASSPHRASE` environment variables.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = std::env::var("POLY_API_KEY").map_err(|_| Error::Config {
            message: "POLY_API_KEY environment variable not set".to_string(),
        })?;
        let api_secret = std::env::var("POLY_API_SECRET").map_err(|_| Error::Config {
            message: "POLY_API_SECRET environment variable not set".to_string(),
        })?;
        let api_passphrase = std::env::var("POLY_API_PASSPHRASE").map_err(|_| Error::Config {
            message: "POLY_API_PASSPHRASE environment variable not set".to_string(),
        })?;

        Ok(Self {
            api_key,
            api_secret,
            api_passphrase,
        })
    }
}

/// Descriptor of the HTTP request an L2 signature covers.
#[derive(Debug, Clone)]
pub struct RequestArgs {
    /// HTTP method.
    pub method: String,
    /// Request path, e.g. `/order`.
    pub path: String,
    /// Request body, if any.
    pub body: Option<String>,
}

impl RequestArgs {
    /// Descriptor for a bodyless request.
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            body: None,
        }
    }

    /// Attach a request body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Authentication tier a client operates at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AuthLevel {
    /// Public endpoints only.
    L0 = 0,
    /// Private key available: order signing and credential derivation.
    L1 = 1,
    /// Private key and API credentials: full trading access.
    L2 = 2,
}
