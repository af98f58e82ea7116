//! Polymarket Order Signing
//!
//! EIP-712 order signing, decimal rounding and CLOB authentication
//! (L1 wallet signatures, L2 HMAC request signatures) for the
//! Polymarket exchange.

pub mod builder;
pub mod client;
pub mod config;
pub mod error;
pub mod headers;
pub mod rounding;
pub mod signing;
pub mod types;

pub use error::{Error, Result};
