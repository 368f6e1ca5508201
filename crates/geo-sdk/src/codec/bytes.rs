//! Fixed-width hex strings used for on-chain addressing.
//!
//! Spaces are identified on-chain by 16 bytes (`0x` + 32 hex chars), while
//! governance topics are 32 bytes (`0x` + 64 hex chars). A bytes16 value is
//! widened to a topic by left-aligning it and padding zeros on the right,
//! which is what the governance contracts match against. Do not change this
//! to big-endian zero-extension.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

lazy_static! {
    static ref BYTES16_HEX_REGEX: Regex = Regex::new(r"^0x[0-9a-fA-F]{32}$").unwrap();
    static ref BYTES32_HEX_REGEX: Regex = Regex::new(r"^0x[0-9a-fA-F]{64}$").unwrap();
    static ref ADDRESS_REGEX: Regex = Regex::new(r"^0x[0-9a-fA-F]{40}$").unwrap();
}

pub fn is_bytes16_hex(value: &str) -> bool {
    BYTES16_HEX_REGEX.is_match(value)
}

pub fn is_bytes32_hex(value: &str) -> bool {
    BYTES32_HEX_REGEX.is_match(value)
}

/// Truncates a bytes32 hex string to its first 16 bytes (lowercased).
pub fn to_bytes16(hex32: &str) -> Result<String, ValidationError> {
    let s = hex32.to_lowercase();
    if !is_bytes32_hex(&s) {
        return Err(ValidationError::InvalidHex32 {
            value: hex32.to_string(),
        });
    }
    Ok(format!("0x{}", &s[2..34]))
}

/// Widens a bytes16 hex string to bytes32: the 16 bytes come first, followed
/// by 16 zero bytes.
pub fn bytes16_to_bytes32_left_aligned(hex16: &str) -> Result<String, ValidationError> {
    let s = hex16.to_lowercase();
    if !is_bytes16_hex(&s) {
        return Err(ValidationError::InvalidBytes16 {
            value: hex16.to_string(),
        });
    }
    Ok(format!("0x{}{}", &s[2..], "0".repeat(32)))
}

/// Decodes a bytes16 hex parameter, naming `field` in the error.
pub fn decode_bytes16(value: &str, field: &'static str) -> Result<[u8; 16], ValidationError> {
    let invalid = || ValidationError::NotBytes16Hex {
        field,
        value: value.to_string(),
    };
    if !is_bytes16_hex(value) {
        return Err(invalid());
    }
    let mut out = [0u8; 16];
    hex::decode_to_slice(&value[2..], &mut out).map_err(|_| invalid())?;
    Ok(out)
}

/// Decodes a bytes32 hex string into raw bytes.
pub fn decode_bytes32(value: &str) -> Result<[u8; 32], ValidationError> {
    let invalid = || ValidationError::InvalidHex32 {
        value: value.to_string(),
    };
    if !is_bytes32_hex(value) {
        return Err(invalid());
    }
    let mut out = [0u8; 32];
    hex::decode_to_slice(&value[2..], &mut out).map_err(|_| invalid())?;
    Ok(out)
}

/// Formats raw bytes as `0x`-prefixed lowercase hex.
pub fn to_prefixed_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Decodes a hex literal (no `0x` prefix) at compile time.
///
/// Intended for `const` tables; an invalid literal fails const evaluation.
pub(crate) const fn hex_literal<const N: usize>(s: &str) -> [u8; N] {
    let bytes = s.as_bytes();
    assert!(bytes.len() == N * 2, "hex literal has the wrong length");
    let mut out = [0u8; N];
    let mut i = 0;
    while i < N {
        out[i] = (hex_digit(bytes[i * 2]) << 4) | hex_digit(bytes[i * 2 + 1]);
        i += 1;
    }
    out
}

const fn hex_digit(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => panic!("invalid hex digit"),
    }
}

/// A 20-byte EVM account or contract address.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address([u8; 20]);

impl Address {
    pub const ZERO: Address = Address([0u8; 20]);

    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Address(bytes)
    }

    /// Builds an address from a `0x`-less hex literal in const context.
    pub(crate) const fn from_hex_literal(s: &str) -> Self {
        Address(hex_literal(s))
    }

    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Parses an address, naming `field` in the error.
    pub fn parse_field(value: &str, field: &'static str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        };
        if !ADDRESS_REGEX.is_match(value) {
            return Err(invalid());
        }
        let mut out = [0u8; 20];
        hex::decode_to_slice(&value[2..], &mut out).map_err(|_| invalid())?;
        Ok(Address(out))
    }
}

impl FromStr for Address {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::parse_field(s, "address")
    }
}

impl TryFrom<String> for Address {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.to_string()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_prefixed_hex(&self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const HEX16: &str = "0x0123456789abcdef0123456789abcdef";

    #[test]
    fn test_predicates() {
        assert!(is_bytes16_hex(HEX16));
        assert!(is_bytes16_hex("0x0123456789ABCDEF0123456789ABCDEF"));
        assert!(!is_bytes16_hex("0123456789abcdef0123456789abcdef"));
        assert!(!is_bytes16_hex("0x0123"));
        assert!(!is_bytes16_hex("0x0123456789abcdef0123456789abcdeg"));

        assert!(is_bytes32_hex(&format!("{}{}", HEX16, "0".repeat(32))));
        assert!(!is_bytes32_hex(HEX16));
    }

    #[test]
    fn test_left_aligned_padding_goes_on_the_right() {
        let widened = bytes16_to_bytes32_left_aligned("0xABCDEF0123456789ABCDEF0123456789").unwrap();
        assert_eq!(
            widened,
            "0xabcdef0123456789abcdef012345678900000000000000000000000000000000"
        );
        assert_eq!(widened.len(), 66);
    }

    #[test]
    fn test_conversion_errors() {
        assert_eq!(
            to_bytes16("0x1234").unwrap_err().to_string(),
            "Invalid hex32: 0x1234"
        );
        assert_eq!(
            bytes16_to_bytes32_left_aligned("abc").unwrap_err().to_string(),
            "Invalid bytes16 hex: abc"
        );
    }

    #[test]
    fn test_decode_bytes16() {
        let bytes = decode_bytes16(HEX16, "daoSpaceId").unwrap();
        assert_eq!(bytes[0], 0x01);
        assert_eq!(bytes[15], 0xef);

        let err = decode_bytes16("0xnope", "daoSpaceId").unwrap_err();
        assert!(err.to_string().starts_with("daoSpaceId must be bytes16 hex"));
    }

    #[test]
    fn test_address_roundtrip() {
        let address: Address = "0xB01683b2f0d38d43fcD4D9aAB980166988924132".parse().unwrap();
        assert_eq!(address.to_string(), "0xb01683b2f0d38d43fcd4d9aab980166988924132");
        assert!("0xB01683".parse::<Address>().is_err());

        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, "\"0xb01683b2f0d38d43fcd4d9aab980166988924132\"");
        assert_eq!(serde_json::from_str::<Address>(&json).unwrap(), address);
    }

    #[test]
    fn test_hex_literal() {
        const BYTES: [u8; 4] = hex_literal("00aBcDff");
        assert_eq!(BYTES, [0x00, 0xab, 0xcd, 0xff]);
    }

    proptest! {
        #[test]
        fn prop_truncate_then_widen_keeps_prefix(bytes in any::<[u8; 32]>()) {
            let hex32 = to_prefixed_hex(&bytes);
            let widened = bytes16_to_bytes32_left_aligned(&to_bytes16(&hex32).unwrap()).unwrap();
            prop_assert_eq!(&widened[..34], &hex32[..34]);
            prop_assert_eq!(&widened[34..], "0".repeat(32));
        }
    }
}
