//! Private-key wallet bound to a chain.
//!
//! Signs raw EIP-712 digests, typed structs, and the L1 auth message.

use std::str::FromStr;

use alloy_primitives::{Address, B256};
use alloy_signer::SignerSync;
use alloy_signer_local::PrivateKeySigner;

use super::auth::ClobAuthMessage;
use super::domain::Domain;
use super::typed_data::Signable;
use crate::error::{Error, Result};

/// EOA wallet that produces order and auth signatures.
#[derive(Clone)]
pub struct OrderSigner {
    signer: PrivateKeySigner,
    chain_id: u64,
}

impl OrderSigner {
    pub fn new(signer: PrivateKeySigner, chain_id: u64) -> Self {
        Self { signer, chain_id }
    }

    /// Parse a hex private key, with or without the 0x prefix.
    pub fn from_private_key(key: &str, chain_id: u64) -> Result<Self> {
        let trimmed = key.trim().trim_start_matches("0x");
        let signer = PrivateKeySigner::from_str(trimmed)
            .map_err(|e| Error::MalformedAddressOrHash(format!("private key: {e}")))?;
        Ok(Self::new(signer, chain_id))
    }

    /// Load the key from `WALLET_PRIVATE_KEY`, honoring a `.env` file.
    pub fn from_env(chain_id: u64) -> Result<Self> {
        dotenvy::dotenv().ok();
        let key = std::env::var("WALLET_PRIVATE_KEY").map_err(|_| Error::Config {
            message: "WALLET_PRIVATE_KEY is not set".to_string(),
        })?;
        Self::from_private_key(&key, chain_id)
    }

    /// Address derived from the private key.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Sign a 32-byte digest, returning 0x-prefixed r || s || v hex.
    ///
    /// v is 27 or 28, the form the exchange contract verifies.
    pub fn sign_digest(&self, digest: B256) -> Result<String> {
        let signature = self.signer.sign_hash_sync(&digest)?;
        Ok(format!("0x{}", hex::encode(signature.as_bytes())))
    }

    /// Hash a typed struct under a domain and sign the digest.
    pub fn sign_typed<S: Signable>(&self, value: &S, domain: &Domain) -> Result<String> {
        self.sign_digest(value.signing_digest(domain))
    }

    /// Produce the L1 auth signature for a timestamp and nonce.
    pub fn sign_clob_auth(&self, timestamp: &str, nonce: u64) -> Result<String> {
        let message = ClobAuthMessage::new(self.address(), timestamp, nonce);
        self.sign_typed(&message, &Domain::clob_auth(self.chain_id))
    }
}

impl std::fmt::Debug for OrderSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderSigner")
            .field("address", &self.address())
            .field("chain_id", &self.chain_id)
            .finish()
    }
}
