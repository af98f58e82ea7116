//! Limit order construction.
//!
//! Turns caller intent (price, size, side) into a signed wire-ready
//! order: validates the price against the market tick, rounds amounts,
//! draws a salt and signs under the exchange domain.

use alloy_primitives::{Address, U256};
use rand::CryptoRng;
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::contract_config;
use crate::error::{Error, Result};
use crate::rounding::{get_order_amounts, price_valid, round_config};
use crate::signing::domain::Domain;
use crate::signing::order::{Order, SignedOrder};
use crate::signing::signer::OrderSigner;
use crate::types::{CreateOrderOptions, OrderArgs, SignatureType};

/// Builds and signs limit orders on behalf of a wallet.
///
/// The funder defaults to the signing key's address; proxy and Safe
/// setups override it so the order spends the wallet's balance while
/// the key only signs.
#[derive(Debug)]
pub struct OrderBuilder<'a> {
    signer: &'a OrderSigner,
    signature_type: SignatureType,
    funder: Option<Address>,
}

impl<'a> OrderBuilder<'a> {
    pub fn new(signer: &'a OrderSigner) -> Self {
        Self {
            signer,
            signature_type: SignatureType::default(),
            funder: None,
        }
    }

    /// Use a non-EOA signature scheme.
    pub fn with_signature_type(mut self, signature_type: SignatureType) -> Self {
        self.signature_type = signature_type;
        self
    }

    /// Fund orders from a proxy or Safe wallet instead of the signing key.
    pub fn with_funder(mut self, funder: Address) -> Self {
        self.funder = Some(funder);
        self
    }

    /// Validate, round, salt and sign an order.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPriceRange`] when the price falls outside
    /// `[tick, 1 - tick]`, [`Error::UnknownChain`] when the signer's
    /// chain has no deployed contracts.
    pub fn build_signed_order<R: CryptoRng>(
        &self,
        args: &OrderArgs,
        options: &CreateOrderOptions,
        rng: &mut R,
    ) -> Result<SignedOrder> {
        if !price_valid(args.price, options.tick_size) {
            let tick = options.tick_size.as_decimal();
            return Err(Error::InvalidPriceRange {
                price: args.price,
                min: tick,
                max: Decimal::ONE - tick,
            });
        }

        let config = round_config(options.tick_size);
        let (side, maker_amount, taker_amount) =
            get_order_amounts(args.side, args.size, args.price, &config)?;

        let contracts = contract_config(self.signer.chain_id(), options.neg_risk)?;

        let order = Order {
            salt: generate_salt(rng),
            maker: self.funder.unwrap_or_else(|| self.signer.address()),
            signer: self.signer.address(),
            taker: args.taker,
            token_id: args.token_id,
            maker_amount: U256::from(maker_amount),
            taker_amount: U256::from(taker_amount),
            expiration: U256::from(args.expiration),
            nonce: U256::from(args.nonce),
            fee_rate_bps: U256::from(args.fee_rate_bps),
            side,
            signature_type: self.signature_type,
        };

        let domain = Domain::exchange(self.signer.chain_id(), contracts.exchange);
        let signature = self.signer.sign_typed(&order, &domain)?;

        debug!(
            token_id = %order.token_id,
            side = %order.side,
            maker_amount = %order.maker_amount,
            taker_amount = %order.taker_amount,
            neg_risk = options.neg_risk,
            "signed order"
        );

        Ok(SignedOrder::from_order(&order, signature))
    }
}

/// Draw a salt from the full 256-bit range.
fn generate_salt<R: CryptoRng>(rng: &mut R) -> U256 {
    let mut bytes = [0u8; 32];
    rng.fill_bytes(&mut bytes);
    U256::from_be_bytes(bytes)
}
