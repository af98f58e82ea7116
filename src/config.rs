//! Per-chain contract addresses for the CTF Exchange.
//!
//! Orders are verified on-chain by a chain- and market-variant-specific
//! exchange contract, so the signing domain must carry the right address.
//! Neg-risk markets use a separate exchange contract; collateral and
//! conditional-tokens contracts are shared within a chain.

use alloy_primitives::{address, Address};

use crate::error::{Error, Result};

/// Chain ID for Polygon mainnet.
pub const POLYGON_CHAIN_ID: u64 = 137;

/// Chain ID for Polygon Amoy testnet.
pub const AMOY_CHAIN_ID: u64 = 80002;

/// Contract addresses the exchange verifies orders against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractConfig {
    /// CTF Exchange contract (the EIP-712 verifying contract).
    pub exchange: Address,
    /// Collateral token (USDC).
    pub collateral: Address,
    /// Conditional tokens framework contract.
    pub conditional_tokens: Address,
}

const POLYGON_CONFIG: ContractConfig = ContractConfig {
    exchange: address!("0x4bFb41d5B3570DeFd03C39a9A4D8dE6Bd8B8982E"),
    collateral: address!("0x2791Bca1f2de4661ED88A30C99A7a9449Aa84174"),
    conditional_tokens: address!("0x4D97DCd97eC945f40cF65F87097ACe5EA0476045"),
};

const POLYGON_NEG_RISK_CONFIG: ContractConfig = ContractConfig {
    exchange: address!("0xC5d563A36AE78145C45a50134d48A1215220f80a"),
    collateral: address!("0x2791Bca1f2de4661ED88A30C99A7a9449Aa84174"),
    conditional_tokens: address!("0x4D97DCd97eC945f40cF65F87097ACe5EA0476045"),
};

const AMOY_CONFIG: ContractConfig = ContractConfig {
    exchange: address!("0xdFE02Eb6733538f8Ea35D585af8DE5958AD99E40"),
    collateral: address!("0x9c4e1703476e875070ee25b56a58b008cfb8fa78"),
    conditional_tokens: address!("0x69308FB512518e39F9b16112fA8d994F4e2Bf8bB"),
};

const AMOY_NEG_RISK_CONFIG: ContractConfig = ContractConfig {
    exchange: address!("0xd91E80cF2E7be2e162c6513ceD06f1dD0dA35296"),
    collateral: address!("0x9c4e1703476e875070ee25b56a58b008cfb8fa78"),
    conditional_tokens: address!("0x69308FB512518e39F9b16112fA8d994F4e2Bf8bB"),
};

/// Look up the contract set for a chain and market variant.
///
/// # Errors
///
/// Returns [`Error::UnknownChain`] for chains without a deployed exchange.
pub fn contract_config(chain_id: u64, neg_risk: bool) -> Result<ContractConfig> {
    match (chain_id, neg_risk) {
        (POLYGON_CHAIN_ID, false) => Ok(POLYGON_CONFIG),
        (POLYGON_CHAIN_ID, true) => Ok(POLYGON_NEG_RISK_CONFIG),
        (AMOY_CHAIN_ID, false) => Ok(AMOY_CONFIG),
        (AMOY_CHAIN_ID, true) => Ok(AMOY_NEG_RISK_CONFIG),
        (chain_id, _) => Err(Error::UnknownChain(chain_id)),
    }
}
