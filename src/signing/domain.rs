//! EIP-712 signing domains for orders and CLOB authentication.
//!
//! Two domain shapes exist: order signing binds to the exchange contract
//! that verifies the order, while the L1 auth handshake is verified
//! off-chain and carries no contract. Each shape hashes with the
//! matching EIP712Domain type signature; using the wrong variant
//! invalidates every signature in that domain.

use std::sync::LazyLock;

use alloy_primitives::{keccak256, Address, B256, U256};
use alloy_sol_types::SolValue;

use super::typed_data::{encode_address, encode_string, encode_uint256};

/// Domain name the CTF Exchange verifies orders under.
pub const EXCHANGE_DOMAIN_NAME: &str = "Polymarket CTF Exchange";

/// Domain name for the L1 authentication handshake.
pub const CLOB_AUTH_DOMAIN_NAME: &str = "ClobAuthDomain";

/// Domain version shared by both contexts.
pub const DOMAIN_VERSION: &str = "1";

static DOMAIN_TYPE_HASH: LazyLock<B256> = LazyLock::new(|| {
    keccak256(
        b"EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)",
    )
});

static DOMAIN_NO_CONTRACT_TYPE_HASH: LazyLock<B256> =
    LazyLock::new(|| keccak256(b"EIP712Domain(string name,string version,uint256 chainId)"));

/// EIP-712 signing domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain {
    /// Domain name.
    pub name: String,
    /// Domain version.
    pub version: String,
    /// Chain ID.
    pub chain_id: u64,
    /// Verifying contract, absent for off-chain verification.
    pub verifying_contract: Option<Address>,
}

impl Domain {
    /// Order-signing domain bound to an exchange contract.
    pub fn exchange(chain_id: u64, verifying_contract: Address) -> Self {
        Self {
            name: EXCHANGE_DOMAIN_NAME.to_string(),
            version: DOMAIN_VERSION.to_string(),
            chain_id,
            verifying_contract: Some(verifying_contract),
        }
    }

    /// L1 authentication domain.
    pub fn clob_auth(chain_id: u64) -> Self {
        Self {
            name: CLOB_AUTH_DOMAIN_NAME.to_string(),
            version: DOMAIN_VERSION.to_string(),
            chain_id,
            verifying_contract: None,
        }
    }

    /// Compute the EIP-712 domain separator hash.
    pub fn separator(&self) -> B256 {
        let name_hash = encode_string(&self.name);
        let version_hash = encode_string(&self.version);
        let chain_id = encode_uint256(U256::from(self.chain_id));

        let encoded = match self.verifying_contract {
            Some(contract) => (
                *DOMAIN_TYPE_HASH,
                name_hash,
                version_hash,
                chain_id,
                encode_address(contract),
            )
                .abi_encode_packed(),
            None => (
                *DOMAIN_NO_CONTRACT_TYPE_HASH,
                name_hash,
                version_hash,
                chain_id,
            )
                .abi_encode_packed(),
        };

        keccak256(&encoded)
    }
}
