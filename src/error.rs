//! Error types for order signing and CLOB authentication.

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid order side: {0}")]
    InvalidSide(String),

    #[error("Invalid tick size: {0}")]
    InvalidTickSize(String),

    #[error("Price {price} outside valid range [{min}, {max}]")]
    InvalidPriceRange {
        price: Decimal,
        min: Decimal,
        max: Decimal,
    },

    #[error("Precision overflow: {0}")]
    PrecisionOverflow(String),

    #[error("Unknown chain id: {0}")]
    UnknownChain(u64),

    #[error("Authentication required: {message}")]
    AuthenticationRequired { message: String },

    #[error("Malformed address or hash: {0}")]
    MalformedAddressOrHash(String),

    #[error("Wallet error: {0}")]
    Wallet(#[from] alloy_signer::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Signing error: {message}")]
    Signing { message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
