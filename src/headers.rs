//! Authentication headers for CLOB requests.
//!
//! L1 headers carry an EIP-712 wallet signature; L2 headers carry an
//! HMAC-SHA256 over the request built from the API secret.

use alloy_primitives::Address;
use base64::Engine;
use chrono::Utc;
use hmac::{Hmac, KeyInit, Mac};
use sha2::Sha256;

use crate::error::{Error, Result};
use crate::signing::signer::OrderSigner;
use crate::types::{ApiCredentials, RequestArgs};

pub const POLY_ADDRESS: &str = "POLY_ADDRESS";
pub const POLY_SIGNATURE: &str = "POLY_SIGNATURE";
pub const POLY_TIMESTAMP: &str = "POLY_TIMESTAMP";
pub const POLY_NONCE: &str = "POLY_NONCE";
pub const POLY_API_KEY: &str = "POLY_API_KEY";
pub const POLY_PASSPHRASE: &str = "POLY_PASSPHRASE";

/// Header name/value pairs in the order the API documents them.
pub type AuthHeaders = Vec<(&'static str, String)>;

/// Current unix time in seconds.
pub fn current_timestamp() -> u64 {
    Utc::now().timestamp() as u64
}

/// Build L1 headers: wallet address plus a ClobAuth signature.
///
/// Used for API key creation and derivation. `timestamp` overrides the
/// clock, mainly for tests.
pub fn create_l1_headers(
    signer: &OrderSigner,
    nonce: u64,
    timestamp: Option<u64>,
) -> Result<AuthHeaders> {
    let timestamp = timestamp.unwrap_or_else(current_timestamp).to_string();
    let signature = signer.sign_clob_auth(&timestamp, nonce)?;

    Ok(vec![
        (POLY_ADDRESS, signer.address().to_string()),
        (POLY_SIGNATURE, signature),
        (POLY_TIMESTAMP, timestamp),
        (POLY_NONCE, nonce.to_string()),
    ])
}

/// Build L2 headers: API key identity plus an HMAC request signature.
///
/// The HMAC covers `timestamp + METHOD + path + body`; the method is
/// uppercased so callers can pass it either way.
pub fn create_l2_headers(
    address: Address,
    credentials: &ApiCredentials,
    request: &RequestArgs,
    timestamp: Option<u64>,
) -> Result<AuthHeaders> {
    let timestamp = timestamp.unwrap_or_else(current_timestamp).to_string();
    let method = request.method.to_uppercase();
    let signature = build_hmac_signature(
        &credentials.api_secret,
        &timestamp,
        &method,
        &request.path,
        request.body.as_deref(),
    )?;

    Ok(vec![
        (POLY_ADDRESS, address.to_string()),
        (POLY_SIGNATURE, signature),
        (POLY_TIMESTAMP, timestamp),
        (POLY_API_KEY, credentials.api_key.clone()),
        (POLY_PASSPHRASE, credentials.api_passphrase.clone()),
    ])
}

/// HMAC-SHA256 request signature, URL-safe base64 encoded.
///
/// The API issues secrets in URL-safe base64, but unpadded and standard
/// encodings are accepted for compatibility.
pub fn build_hmac_signature(
    secret: &str,
    timestamp: &str,
    method: &str,
    path: &str,
    body: Option<&str>,
) -> Result<String> {
    let message = match body {
        Some(b) => format!("{}{}{}{}", timestamp, method, path, b),
        None => format!("{}{}{}", timestamp, method, path),
    };

    let secret_bytes = base64::engine::general_purpose::URL_SAFE
        .decode(secret)
        .or_else(|_| base64::engine::general_purpose::URL_SAFE_NO_PAD.decode(secret))
        .or_else(|_| base64::engine::general_purpose::STANDARD.decode(secret))
        .map_err(|e| Error::Signing {
            message: format!("Invalid API secret encoding: {}", e),
        })?;

    let mut mac = Hmac::<Sha256>::new_from_slice(&secret_bytes).map_err(|e| Error::Signing {
        message: format!("Failed to create HMAC: {}", e),
    })?;

    mac.update(message.as_bytes());
    let result = mac.finalize();

    Ok(base64::engine::general_purpose::URL_SAFE.encode(result.into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::POLYGON_CHAIN_ID;

    const TEST_PRIVATE_KEY: &str =
        "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const TEST_SECRET: &str = "AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8=";

    fn test_signer() -> OrderSigner {
        OrderSigner::from_private_key(TEST_PRIVATE_KEY, POLYGON_CHAIN_ID).unwrap()
    }

    fn test_credentials() -> ApiCredentials {
        ApiCredentials::new(
            "key-id".to_string(),
            TEST_SECRET.to_string(),
            "passphrase".to_string(),
        )
    }

    #[test]
    fn test_hmac_post_with_body() {
        let signature = build_hmac_signature(
            TEST_SECRET,
            "1700000000",
            "POST",
            "/order",
            Some(r#"{"hash":"0x123"}"#),
        )
        .unwrap();

        assert_eq!(signature, "7VNJy5Y3mGqy4VkHzKJd45AiIVnlkVJtycPXGW0DG3Y=");
    }

    #[test]
    fn test_hmac_get_without_body() {
        let signature =
            build_hmac_signature(TEST_SECRET, "1700000000", "GET", "/orders", None).unwrap();

        assert_eq!(signature, "8u-Yd8rbc9lbPzIcvaehJZ_WWGVYy31n_de4-txzRz8=");
    }

    #[test]
    fn test_hmac_accepts_unpadded_secret() {
        let unpadded = TEST_SECRET.trim_end_matches('=');
        assert_ne!(unpadded, TEST_SECRET);

        let padded =
            build_hmac_signature(TEST_SECRET, "1700000000", "GET", "/orders", None).unwrap();
        let stripped =
            build_hmac_signature(unpadded, "1700000000", "GET", "/orders", None).unwrap();

        assert_eq!(padded, stripped);
    }

    #[test]
    fn test_hmac_accepts_standard_alphabet_secret() {
        // Same key bytes, standard vs URL-safe alphabet.
        let standard = build_hmac_signature("++++", "1700000000", "GET", "/orders", None).unwrap();
        let url_safe = build_hmac_signature("----", "1700000000", "GET", "/orders", None).unwrap();

        assert_eq!(standard, url_safe);
    }

    #[test]
    fn test_hmac_rejects_garbage_secret() {
        let err = build_hmac_signature("not base64!!", "1700000000", "GET", "/orders", None)
            .unwrap_err();
        assert!(matches!(err, Error::Signing { .. }));
    }

    #[test]
    fn test_l1_headers() {
        let headers = create_l1_headers(&test_signer(), 0, Some(1_700_000_000)).unwrap();

        assert_eq!(
            headers,
            vec![
                (
                    POLY_ADDRESS,
                    "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".to_string()
                ),
                (
                    POLY_SIGNATURE,
                    "0x659ed4b28ae28e0f038fdf0023c00863c9559caacb9ebc83f44eea87059a099a36f1e1dee110e7faa1c4f65d17489b2da1333ebef78bbe2116d81207b975052d1c"
                        .to_string()
                ),
                (POLY_TIMESTAMP, "1700000000".to_string()),
                (POLY_NONCE, "0".to_string()),
            ]
        );
    }

    #[test]
    fn test_l2_headers_uppercase_method() {
        let signer = test_signer();
        let request = RequestArgs::new("get", "/orders");
        let headers =
            create_l2_headers(signer.address(), &test_credentials(), &request, Some(1_700_000_000))
                .unwrap();

        assert_eq!(headers[0].0, POLY_ADDRESS);
        assert_eq!(headers[0].1, "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
        assert_eq!(headers[1].0, POLY_SIGNATURE);
        assert_eq!(headers[1].1, "8u-Yd8rbc9lbPzIcvaehJZ_WWGVYy31n_de4-txzRz8=");
        assert_eq!(headers[2], (POLY_TIMESTAMP, "1700000000".to_string()));
        assert_eq!(headers[3], (POLY_API_KEY, "key-id".to_string()));
        assert_eq!(headers[4], (POLY_PASSPHRASE, "passphrase".to_string()));
    }

    #[test]
    fn test_hmac_binds_each_component() {
        let base = build_hmac_signature(TEST_SECRET, "1700000000", "GET", "/orders", None).unwrap();

        let other_ts =
            build_hmac_signature(TEST_SECRET, "1700000001", "GET", "/orders", None).unwrap();
        let other_path =
            build_hmac_signature(TEST_SECRET, "1700000000", "GET", "/order", None).unwrap();
        let with_body =
            build_hmac_signature(TEST_SECRET, "1700000000", "GET", "/orders", Some("{}")).unwrap();

        assert_ne!(base, other_ts);
        assert_ne!(base, other_path);
        assert_ne!(base, with_body);
    }
}
