//! CTF exchange order struct, its EIP-712 encoding, and the wire form.

use std::sync::LazyLock;

use alloy_primitives::{keccak256, Address, B256, U256};
use serde::{Deserialize, Serialize};

use super::typed_data::{encode_address, encode_uint256, encode_uint8, Signable};
use crate::types::{OrderSide, OrderType, SignatureType};

static ORDER_TYPE_HASH: LazyLock<B256> = LazyLock::new(|| {
    keccak256(
        b"Order(uint256 salt,address maker,address signer,address taker,uint256 tokenId,uint256 makerAmount,uint256 takerAmount,uint256 expiration,uint256 nonce,uint256 feeRateBps,uint8 side,uint8 signatureType)",
    )
});

/// Order struct matching the exchange contract's EIP-712 layout.
///
/// Amounts are in token base units (6 decimals). `maker` is the funding
/// address, `signer` the key that produces the signature; they differ
/// only for proxy and Safe wallets.
#[derive(Debug, Clone)]
pub struct Order {
    /// Random salt, full 256-bit range.
    pub salt: U256,
    /// Address whose balance funds the order.
    pub maker: Address,
    /// Address that signs the order.
    pub signer: Address,
    /// Counterparty restriction, zero for public orders.
    pub taker: Address,
    /// ERC-1155 outcome token id.
    pub token_id: U256,
    /// Amount the maker gives up.
    pub maker_amount: U256,
    /// Amount the maker receives.
    pub taker_amount: U256,
    /// Unix expiration, zero for no expiry.
    pub expiration: U256,
    /// Maker nonce for on-chain cancellation.
    pub nonce: U256,
    /// Fee in basis points.
    pub fee_rate_bps: U256,
    pub side: OrderSide,
    pub signature_type: SignatureType,
}

impl Signable for Order {
    fn type_hash(&self) -> B256 {
        *ORDER_TYPE_HASH
    }

    fn encoded_fields(&self) -> Vec<B256> {
        vec![
            encode_uint256(self.salt),
            encode_address(self.maker),
            encode_address(self.signer),
            encode_address(self.taker),
            encode_uint256(self.token_id),
            encode_uint256(self.maker_amount),
            encode_uint256(self.taker_amount),
            encode_uint256(self.expiration),
            encode_uint256(self.nonce),
            encode_uint256(self.fee_rate_bps),
            encode_uint8(self.side.as_u8()),
            encode_uint8(self.signature_type.as_u8()),
        ]
    }
}

/// Order plus signature in the shape the CLOB accepts.
///
/// Numeric fields go out as decimal strings, addresses checksummed,
/// enums as their contract integer codes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignedOrder {
    pub salt: String,
    pub maker: String,
    pub signer: String,
    pub taker: String,
    pub token_id: String,
    pub maker_amount: String,
    pub taker_amount: String,
    pub expiration: String,
    pub nonce: String,
    pub fee_rate_bps: String,
    pub side: u8,
    pub signature_type: u8,
    pub signature: String,
}

impl SignedOrder {
    /// Render an order and its signature into wire form.
    pub fn from_order(order: &Order, signature: String) -> Self {
        Self {
            salt: order.salt.to_string(),
            maker: order.maker.to_string(),
            signer: order.signer.to_string(),
            taker: order.taker.to_string(),
            token_id: order.token_id.to_string(),
            maker_amount: order.maker_amount.to_string(),
            taker_amount: order.taker_amount.to_string(),
            expiration: order.expiration.to_string(),
            nonce: order.nonce.to_string(),
            fee_rate_bps: order.fee_rate_bps.to_string(),
            side: order.side.as_u8(),
            signature_type: order.signature_type.as_u8(),
            signature,
        }
    }
}

/// Body of POST /order.
#[derive(Debug, Clone, Serialize)]
pub struct PostOrderRequest {
    pub order: SignedOrder,
    #[serde(rename = "orderType")]
    pub order_type: OrderType,
    /// API key of the account placing the order.
    pub owner: String,
}
