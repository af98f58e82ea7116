//! L1 authentication message for the CLOB handshake.

use std::sync::LazyLock;

use alloy_primitives::{keccak256, Address, B256, U256};

use super::typed_data::{encode_address, encode_string, encode_uint256, Signable};

/// Fixed attestation text the CLOB expects in every auth signature.
pub const CLOB_AUTH_MESSAGE: &str = "This message attests that I control the given wallet";

static CLOB_AUTH_TYPE_HASH: LazyLock<B256> = LazyLock::new(|| {
    keccak256(b"ClobAuth(address address,string timestamp,uint256 nonce,string message)")
});

/// EIP-712 ClobAuth struct signed during the L1 handshake.
///
/// Built once per authentication call; the server checks the recovered
/// signer against `address` and the timestamp against its clock.
#[derive(Debug, Clone)]
pub struct ClobAuthMessage {
    /// Wallet attesting control.
    pub address: Address,
    /// Unix seconds, stringified.
    pub timestamp: String,
    /// Replay-protection nonce.
    pub nonce: U256,
    /// Fixed attestation text.
    pub message: String,
}

impl ClobAuthMessage {
    /// Build the attestation for a wallet at a timestamp.
    pub fn new(address: Address, timestamp: impl Into<String>, nonce: u64) -> Self {
        Self {
            address,
            timestamp: timestamp.into(),
            nonce: U256::from(nonce),
            message: CLOB_AUTH_MESSAGE.to_string(),
        }
    }
}

impl Signable for ClobAuthMessage {
    fn type_hash(&self) -> B256 {
        *CLOB_AUTH_TYPE_HASH
    }

    fn encoded_fields(&self) -> Vec<B256> {
        vec![
            encode_address(self.address),
            encode_string(&self.timestamp),
            encode_uint256(self.nonce),
            encode_string(&self.message),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::POLYGON_CHAIN_ID;
    use crate::signing::domain::Domain;
    use alloy_primitives::{address, b256};

    const TEST_ADDRESS: Address = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

    #[test]
    fn test_type_hash() {
        let message = ClobAuthMessage::new(TEST_ADDRESS, "1700000000", 0);
        assert_eq!(
            message.type_hash(),
            b256!("0x52578c5c725a28a84fedc8c22aa47947822942f35b4dc350db028e45320e035c")
        );
    }

    #[test]
    fn test_struct_hash() {
        let message = ClobAuthMessage::new(TEST_ADDRESS, "1700000000", 0);
        assert_eq!(
            message.struct_hash(),
            b256!("0xc1620afeef6a5bbe844b0ac9d2ad2d1213fe13f98f78542ddfcf57356148ebb4")
        );
    }

    #[test]
    fn test_signing_digest() {
        let message = ClobAuthMessage::new(TEST_ADDRESS, "1700000000", 0);
        let domain = Domain::clob_auth(POLYGON_CHAIN_ID);

        assert_eq!(
            message.signing_digest(&domain),
            b256!("0xc85352894b3c41f3ea6152479d64b9233fbaf2de87eabc7e4bba3a161fd28493")
        );
    }

    #[test]
    fn test_digest_binds_every_field() {
        let domain = Domain::clob_auth(POLYGON_CHAIN_ID);
        let base = ClobAuthMessage::new(TEST_ADDRESS, "1700000000", 0);

        let other_ts = ClobAuthMessage::new(TEST_ADDRESS, "1700000001", 0);
        let other_nonce = ClobAuthMessage::new(TEST_ADDRESS, "1700000000", 1);

        assert_ne!(
            base.signing_digest(&domain),
            other_ts.signing_digest(&domain)
        );
        assert_ne!(
            base.signing_digest(&domain),
            other_nonce.signing_digest(&domain)
        );
    }
}
