//! EIP-712 typed data encoding primitives.
//!
//! Every signable structure reduces to the same scheme: a constant type
//! hash, a fixed-order list of 32-byte field encodings, and a digest
//! assembled with the `0x1901` prefix. The exchange recomputes this
//! exact byte sequence on-chain, so field order, padding and
//! string-vs-bytes handling are all load-bearing.

use alloy_primitives::{keccak256, Address, FixedBytes, B256, U256};
use alloy_sol_types::SolValue;

use super::domain::Domain;

const EIP712_PREFIX: FixedBytes<2> = FixedBytes::new([0x19, 0x01]);

/// Encode a uint256 as a big-endian 32-byte word.
pub fn encode_uint256(value: U256) -> B256 {
    B256::from(value)
}

/// Encode an address as 20 bytes zero-left-padded to 32.
pub fn encode_address(value: Address) -> B256 {
    B256::left_padding_from(value.as_slice())
}

/// Encode a uint8 as a single byte zero-left-padded to 32.
pub fn encode_uint8(value: u8) -> B256 {
    B256::left_padding_from(&[value])
}

/// Encode a string as the keccak256 of its UTF-8 bytes.
///
/// Dynamic types hash their contents; the raw bytes never appear in the
/// struct encoding.
pub fn encode_string(value: &str) -> B256 {
    keccak256(value.as_bytes())
}

/// A structure that can be hashed and signed as EIP-712 typed data.
///
/// Implementors declare their constant type hash and their field
/// encodings in declared order; struct hashing and digest assembly are
/// shared.
pub trait Signable {
    /// keccak256 of the structure's Solidity-style type signature.
    fn type_hash(&self) -> B256;

    /// The 32-byte encoding of every field, in declared order.
    fn encoded_fields(&self) -> Vec<B256>;

    /// keccak256(typeHash ++ encoded fields).
    fn struct_hash(&self) -> B256 {
        let encoded = (self.type_hash(), self.encoded_fields()).abi_encode_packed();
        keccak256(&encoded)
    }

    /// The 32-byte digest to sign, bound to `domain`.
    fn signing_digest(&self, domain: &Domain) -> B256 {
        eip712_digest(domain.separator(), self.struct_hash())
    }
}

/// Assemble the final EIP-712 digest:
/// keccak256("\x19\x01" ++ domainSeparator ++ structHash).
pub fn eip712_digest(domain_separator: B256, struct_hash: B256) -> B256 {
    let data = (EIP712_PREFIX, domain_separator, struct_hash).abi_encode_packed();
    keccak256(&data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, b256};

    #[test]
    fn test_encode_uint256_is_big_endian() {
        let encoded = encode_uint256(U256::from(1u64));
        assert_eq!(
            encoded,
            b256!("0x0000000000000000000000000000000000000000000000000000000000000001")
        );
    }

    #[test]
    fn test_encode_address_left_pads() {
        let addr = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
        let encoded = encode_address(addr);

        assert_eq!(&encoded[..12], &[0u8; 12]);
        assert_eq!(&encoded[12..], addr.as_slice());
    }

    #[test]
    fn test_encode_uint8_left_pads() {
        let encoded = encode_uint8(1);
        assert_eq!(&encoded[..31], &[0u8; 31]);
        assert_eq!(encoded[31], 1);
    }

    #[test]
    fn test_encode_string_hashes_contents() {
        // keccak256 of the empty string
        assert_eq!(
            encode_string(""),
            b256!("0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470")
        );
        assert_eq!(
            encode_string("abc"),
            b256!("0x4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45")
        );
    }

    #[test]
    fn test_digest_changes_with_separator() {
        let struct_hash = encode_string("abc");
        let d1 = eip712_digest(encode_string("domain-a"), struct_hash);
        let d2 = eip712_digest(encode_string("domain-b"), struct_hash);

        assert_ne!(d1, d2);
        assert_eq!(d1, eip712_digest(encode_string("domain-a"), struct_hash));
    }
}
