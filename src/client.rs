//! Client facade over the signing, rounding and header machinery.
//!
//! A client is assembled in layers: chain only (public data), plus a
//! wallet (L1, order signing and key derivation), plus API credentials
//! (L2, full trading). Each operation checks the layer it needs.

use alloy_primitives::Address;
use tracing::info;

use crate::builder::OrderBuilder;
use crate::error::{Error, Result};
use crate::headers::{create_l1_headers, create_l2_headers, AuthHeaders};
use crate::signing::order::{PostOrderRequest, SignedOrder};
use crate::signing::signer::OrderSigner;
use crate::types::{
    ApiCredentials, AuthLevel, CreateOrderOptions, OrderArgs, OrderType, RequestArgs,
    SignatureType,
};

/// Stateful facade for signing orders and authenticating requests.
#[derive(Debug)]
pub struct SigningClient {
    chain_id: u64,
    signer: Option<OrderSigner>,
    credentials: Option<ApiCredentials>,
    signature_type: SignatureType,
    funder: Option<Address>,
}

impl SigningClient {
    /// Public-only client for a chain.
    pub fn new(chain_id: u64) -> Self {
        Self {
            chain_id,
            signer: None,
            credentials: None,
            signature_type: SignatureType::default(),
            funder: None,
        }
    }

    /// Attach a wallet. The client adopts the signer's chain.
    pub fn with_signer(mut self, signer: OrderSigner) -> Self {
        self.chain_id = signer.chain_id();
        self.signer = Some(signer);
        self
    }

    /// Attach API credentials for L2 endpoints.
    pub fn with_credentials(mut self, credentials: ApiCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Use a non-EOA signature scheme for orders.
    pub fn with_signature_type(mut self, signature_type: SignatureType) -> Self {
        self.signature_type = signature_type;
        self
    }

    /// Fund orders from a proxy or Safe wallet.
    pub fn with_funder(mut self, funder: Address) -> Self {
        self.funder = Some(funder);
        self
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Wallet address, if a signer is attached.
    pub fn address(&self) -> Option<Address> {
        self.signer.as_ref().map(|s| s.address())
    }

    /// Highest tier this client can authenticate at.
    pub fn auth_level(&self) -> AuthLevel {
        match (&self.signer, &self.credentials) {
            (Some(_), Some(_)) => AuthLevel::L2,
            (Some(_), None) => AuthLevel::L1,
            (None, _) => AuthLevel::L0,
        }
    }

    fn require_l1(&self) -> Result<&OrderSigner> {
        self.signer
            .as_ref()
            .ok_or_else(|| Error::AuthenticationRequired {
                message: "A private key is needed to interact with this endpoint!".to_string(),
            })
    }

    fn require_l2(&self) -> Result<(&OrderSigner, &ApiCredentials)> {
        let signer = self.require_l1()?;
        let credentials =
            self.credentials
                .as_ref()
                .ok_or_else(|| Error::AuthenticationRequired {
                    message: "API Credentials are needed to interact with this endpoint!"
                        .to_string(),
                })?;
        Ok((signer, credentials))
    }

    /// Build and sign a limit order for submission.
    pub fn create_order(
        &self,
        args: &OrderArgs,
        options: &CreateOrderOptions,
    ) -> Result<SignedOrder> {
        let signer = self.require_l1()?;

        let mut builder = OrderBuilder::new(signer).with_signature_type(self.signature_type);
        if let Some(funder) = self.funder {
            builder = builder.with_funder(funder);
        }

        let signed = builder.build_signed_order(args, options, &mut rand::rng())?;

        info!(
            token_id = %args.token_id,
            side = %args.side,
            price = %args.price,
            size = %args.size,
            "created order"
        );

        Ok(signed)
    }

    /// Headers for L1 endpoints (API key creation and derivation).
    pub fn l1_auth_headers(&self, nonce: u64) -> Result<AuthHeaders> {
        let signer = self.require_l1()?;
        create_l1_headers(signer, nonce, None)
    }

    /// Headers for L2 endpoints, signed over the given request.
    pub fn l2_auth_headers(&self, request: &RequestArgs) -> Result<AuthHeaders> {
        let (signer, credentials) = self.require_l2()?;
        create_l2_headers(signer.address(), credentials, request, None)
    }

    /// Assemble the POST /order body for a signed order.
    pub fn post_order_request(
        &self,
        order: SignedOrder,
        order_type: OrderType,
    ) -> Result<PostOrderRequest> {
        let (_, credentials) = self.require_l2()?;

        Ok(PostOrderRequest {
            order,
            order_type,
            owner: credentials.api_key.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::POLYGON_CHAIN_ID;
    use crate::types::{parse_token_id, OrderSide, TickSize};
    use alloy_primitives::address;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    const TEST_PRIVATE_KEY: &str =
        "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const TOKEN_ID: &str =
        "71321045679252212594626385532706912750332728571942532289631379312455583992563";

    fn l1_client() -> SigningClient {
        let signer = OrderSigner::from_private_key(TEST_PRIVATE_KEY, POLYGON_CHAIN_ID).unwrap();
        SigningClient::new(POLYGON_CHAIN_ID).with_signer(signer)
    }

    fn l2_client() -> SigningClient {
        l1_client().with_credentials(ApiCredentials::new(
            "key-id".to_string(),
            "AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8=".to_string(),
            "passphrase".to_string(),
        ))
    }

    fn buy_args() -> OrderArgs {
        OrderArgs::new(
            parse_token_id(TOKEN_ID).unwrap(),
            Decimal::from_str("0.5").unwrap(),
            Decimal::from(100u64),
            OrderSide::Buy,
        )
    }

    fn options() -> CreateOrderOptions {
        CreateOrderOptions::new(TickSize::Hundredth, false)
    }

    #[test]
    fn test_auth_levels() {
        assert_eq!(
            SigningClient::new(POLYGON_CHAIN_ID).auth_level(),
            AuthLevel::L0
        );
        assert_eq!(l1_client().auth_level(), AuthLevel::L1);
        assert_eq!(l2_client().auth_level(), AuthLevel::L2);
    }

    #[test]
    fn test_l0_cannot_sign() {
        let client = SigningClient::new(POLYGON_CHAIN_ID);

        let err = client.create_order(&buy_args(), &options()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Authentication required: A private key is needed to interact with this endpoint!"
        );

        assert!(client.l1_auth_headers(0).is_err());
        assert!(client.address().is_none());
    }

    #[test]
    fn test_l1_cannot_use_l2_endpoints() {
        let client = l1_client();
        let request = RequestArgs::new("GET", "/orders");

        let err = client.l2_auth_headers(&request).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Authentication required: API Credentials are needed to interact with this endpoint!"
        );
    }

    #[test]
    fn test_create_order() {
        let signed = l1_client().create_order(&buy_args(), &options()).unwrap();

        assert_eq!(signed.maker_amount, "50000000");
        assert_eq!(signed.taker_amount, "100000000");
        assert_eq!(signed.maker, "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
        assert_eq!(signed.signature.len(), 132);
    }

    #[test]
    fn test_orders_get_distinct_salts() {
        let client = l1_client();

        let first = client.create_order(&buy_args(), &options()).unwrap();
        let second = client.create_order(&buy_args(), &options()).unwrap();

        assert_ne!(first.salt, second.salt);
        assert_ne!(first.signature, second.signature);
    }

    #[test]
    fn test_client_applies_proxy_settings() {
        let funder = address!("0x70997970C51812dc3A010C7d01b50e0d17dc79C8");
        let client = l1_client()
            .with_signature_type(SignatureType::PolyProxy)
            .with_funder(funder);

        let signed = client.create_order(&buy_args(), &options()).unwrap();

        assert_eq!(signed.maker, "0x70997970C51812dc3A010C7d01b50e0d17dc79C8");
        assert_eq!(signed.signer, "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
        assert_eq!(signed.signature_type, 1);
    }

    #[test]
    fn test_l1_headers_shape() {
        let headers = l1_client().l1_auth_headers(0).unwrap();

        assert_eq!(headers.len(), 4);
        assert_eq!(headers[0].0, "POLY_ADDRESS");
        assert_eq!(headers[0].1, "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
        assert_eq!(headers[3], ("POLY_NONCE", "0".to_string()));
    }

    #[test]
    fn test_l2_headers_shape() {
        let request = RequestArgs::new("GET", "/orders");
        let headers = l2_client().l2_auth_headers(&request).unwrap();

        assert_eq!(headers.len(), 5);
        assert_eq!(headers[3], ("POLY_API_KEY", "key-id".to_string()));
        assert_eq!(headers[4], ("POLY_PASSPHRASE", "passphrase".to_string()));
    }

    #[test]
    fn test_post_order_request_owner() {
        let client = l2_client();
        let signed = client.create_order(&buy_args(), &options()).unwrap();

        let request = client
            .post_order_request(signed, OrderType::Gtc)
            .unwrap();
        assert_eq!(request.owner, "key-id");

        let l1_only = l1_client();
        let signed = l1_only.create_order(&buy_args(), &options()).unwrap();
        assert!(l1_only.post_order_request(signed, OrderType::Gtc).is_err());
    }
}
