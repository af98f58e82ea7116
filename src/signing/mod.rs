//! EIP-712 signing for CLOB orders and authentication.
//!
//! Implements the typed-data encoding the exchange contracts verify and
//! the ClobAuth attestation the API checks during the L1 handshake.
//!
//! # Architecture
//!
//! ```text
//! Order / ClobAuthMessage ── Signable ──► struct_hash
//!                                             │
//! Domain ──────────────── separator ──────────┤
//!                                             ▼
//!                             keccak256(0x1901 ‖ sep ‖ hash)
//!                                             │
//! OrderSigner ─────────── sign_digest ────────┘
//!                                             │
//!                                             ▼
//!                                 0x-prefixed r ‖ s ‖ v hex
//! ```
//!
//! # Example
//!
//! ```ignore
//! use polymarket_signing::config::POLYGON_CHAIN_ID;
//! use polymarket_signing::signing::OrderSigner;
//!
//! let signer = OrderSigner::from_private_key("0x...", POLYGON_CHAIN_ID)?;
//! let auth_signature = signer.sign_clob_auth("1700000000", 0)?;
//! ```

pub mod auth;
pub mod domain;
pub mod order;
pub mod signer;
pub mod typed_data;

pub use auth::{ClobAuthMessage, CLOB_AUTH_MESSAGE};
pub use domain::{Domain, CLOB_AUTH_DOMAIN_NAME, DOMAIN_VERSION, EXCHANGE_DOMAIN_NAME};
pub use order::{Order, PostOrderRequest, SignedOrder};
pub use signer::OrderSigner;
pub use typed_data::{eip712_digest, Signable};
