//! Solidity ABI encoding for contract calldata.
//!
//! Implements the head/tail layout of the contract ABI for the value shapes
//! Geo contracts take: addresses, unsigned integers, fixed bytes, dynamic
//! bytes and strings, dynamic arrays, and tuples.

use sha3::{Digest, Keccak256};

use crate::codec::bytes::Address;

const WORD: usize = 32;

// =============================================================================
// TOKENS
// =============================================================================

/// A single ABI value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `address`
    Address(Address),
    /// `uintN` for N <= 128.
    Uint(u128),
    /// `bytesN` for N <= 32, left-aligned in its word.
    FixedBytes(Vec<u8>),
    /// `bytes`
    Bytes(Vec<u8>),
    /// `string`
    String(String),
    /// `T[]`
    Array(Vec<Token>),
    /// `(T1, T2, ...)`
    Tuple(Vec<Token>),
}

impl Token {
    /// Returns true if the value is encoded in the tail with an offset in the head.
    pub fn is_dynamic(&self) -> bool {
        match self {
            Token::Address(_) | Token::Uint(_) | Token::FixedBytes(_) => false,
            Token::Bytes(_) | Token::String(_) | Token::Array(_) => true,
            Token::Tuple(items) => items.iter().any(Token::is_dynamic),
        }
    }

    /// Size of this value's head slot in bytes.
    fn head_len(&self) -> usize {
        match self {
            Token::Tuple(items) if !self.is_dynamic() => items.iter().map(Token::head_len).sum(),
            _ => WORD,
        }
    }
}

// =============================================================================
// ENCODING
// =============================================================================

/// Writer for ABI words.
#[derive(Debug, Clone, Default)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Writes raw bytes without padding.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Writes an unsigned integer as a big-endian word.
    pub fn write_uint(&mut self, value: u128) {
        self.buf.extend_from_slice(&[0u8; 16]);
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes an address right-aligned in a word.
    pub fn write_address(&mut self, address: &Address) {
        self.buf.extend_from_slice(&[0u8; 12]);
        self.buf.extend_from_slice(address.as_bytes());
    }

    /// Writes bytes left-aligned and zero-padded to a word boundary.
    pub fn write_padded(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
        let rem = bytes.len() % WORD;
        if rem != 0 {
            self.buf.resize(self.buf.len() + WORD - rem, 0);
        }
    }

    /// Writes a length word followed by the padded bytes.
    pub fn write_bytes_prefixed(&mut self, bytes: &[u8]) {
        self.write_uint(bytes.len() as u128);
        self.write_padded(bytes);
    }

    /// Writes a sequence of values with the head/tail layout.
    ///
    /// Offsets in the head are relative to the start of this sequence.
    pub fn write_sequence(&mut self, tokens: &[Token]) {
        let heads_len: usize = tokens.iter().map(Token::head_len).sum();
        let mut tail = Writer::new();

        for token in tokens {
            if token.is_dynamic() {
                self.write_uint((heads_len + tail.len()) as u128);
                tail.write_token(token);
            } else {
                self.write_token(token);
            }
        }

        self.write_bytes(tail.as_bytes());
    }

    /// Writes the full encoding of a single value.
    pub fn write_token(&mut self, token: &Token) {
        match token {
            Token::Address(address) => self.write_address(address),
            Token::Uint(value) => self.write_uint(*value),
            Token::FixedBytes(bytes) => {
                debug_assert!(bytes.len() <= WORD, "bytesN is limited to 32 bytes");
                self.write_padded(bytes);
                if bytes.is_empty() {
                    self.buf.extend_from_slice(&[0u8; WORD]);
                }
            }
            Token::Bytes(bytes) => self.write_bytes_prefixed(bytes),
            Token::String(s) => self.write_bytes_prefixed(s.as_bytes()),
            Token::Array(items) => {
                self.write_uint(items.len() as u128);
                self.write_sequence(items);
            }
            Token::Tuple(items) => self.write_sequence(items),
        }
    }
}

/// ABI-encodes a parameter list (`abi.encode(...)`).
pub fn encode(tokens: &[Token]) -> Vec<u8> {
    let mut writer = Writer::with_capacity(tokens.len() * WORD * 2);
    writer.write_sequence(tokens);
    writer.into_bytes()
}

/// Computes keccak-256 of `data`.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    Keccak256::digest(data).into()
}

/// Returns the 4-byte function selector for a canonical signature such as
/// `"transfer(address,uint256)"`.
pub fn selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

/// Encodes a function call: selector followed by the encoded arguments.
pub fn encode_function_call(signature: &str, args: &[Token]) -> Vec<u8> {
    let mut writer = Writer::with_capacity(4 + args.len() * WORD * 2);
    writer.write_bytes(&selector(signature));
    writer.write_sequence(args);
    writer.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(hex_str: &str) -> Vec<u8> {
        let bytes = hex::decode(hex_str).unwrap();
        let mut w = vec![0u8; 32 - bytes.len()];
        w.extend_from_slice(&bytes);
        w
    }

    #[test]
    fn test_keccak256_vectors() {
        assert_eq!(
            hex::encode(keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
        assert_eq!(
            hex::encode(keccak256(b"GOVERNANCE.EDITS_PUBLISHED")),
            "4fa19215d8045febfe0318814bb31d47009389b078ae12e4230ecef644adc65e"
        );
    }

    #[test]
    fn test_selectors() {
        assert_eq!(hex::encode(selector("transfer(address,uint256)")), "a9059cbb");
        assert_eq!(
            hex::encode(selector("enter(bytes16,bytes16,bytes32,bytes32,bytes,bytes)")),
            "4d9ad2b3"
        );
        assert_eq!(hex::encode(selector("publish(bytes32,bytes,bytes)")), "6b47f61a");
    }

    #[test]
    fn test_static_values() {
        let address = Address::from_bytes([0x11; 20]);
        let encoded = encode(&[
            Token::Uint(1),
            Token::Address(address),
            Token::FixedBytes(vec![0xab; 16]),
        ]);
        assert_eq!(encoded.len(), 96);
        assert_eq!(&encoded[0..32], word("01").as_slice());
        assert_eq!(&encoded[32..44], &[0u8; 12]);
        assert_eq!(&encoded[44..64], &[0x11; 20]);
        assert_eq!(&encoded[64..80], &[0xab; 16]);
        assert_eq!(&encoded[80..96], &[0u8; 16]);
    }

    #[test]
    fn test_string_encoding() {
        let encoded = encode(&[Token::String("ipfs://bafy".to_string())]);
        assert_eq!(encoded.len(), 96);
        assert_eq!(&encoded[0..32], word("20").as_slice());
        assert_eq!(&encoded[32..64], word("0b").as_slice());
        assert_eq!(&encoded[64..75], b"ipfs://bafy");
        assert!(encoded[75..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_empty_bytes_is_length_word_only() {
        let encoded = encode(&[Token::Bytes(Vec::new())]);
        assert_eq!(encoded.len(), 64);
        assert_eq!(&encoded[0..32], word("20").as_slice());
        assert_eq!(&encoded[32..64], &[0u8; 32]);
    }

    #[test]
    fn test_mixed_static_and_dynamic_offsets() {
        // (bytes16, bytes, bytes): head is three words, tails follow in order.
        let encoded = encode(&[
            Token::FixedBytes(vec![0x01; 16]),
            Token::Bytes(vec![0xaa; 3]),
            Token::Bytes(Vec::new()),
        ]);
        assert_eq!(&encoded[32..64], word("60").as_slice());
        assert_eq!(&encoded[64..96], word("a0").as_slice());
        assert_eq!(&encoded[96..128], word("03").as_slice());
        assert_eq!(&encoded[128..131], &[0xaa; 3]);
        assert_eq!(&encoded[160..192], &[0u8; 32]);
        assert_eq!(encoded.len(), 192);
    }

    #[test]
    fn test_array_of_dynamic_tuples() {
        // (uint8, (address,uint256,bytes)[]) with a single element.
        let encoded = encode(&[
            Token::Uint(1),
            Token::Array(vec![Token::Tuple(vec![
                Token::Address(Address::from_bytes([0x22; 20])),
                Token::Uint(0),
                Token::Bytes(vec![0xff; 4]),
            ])]),
        ]);

        // head: mode, offset to array
        assert_eq!(&encoded[32..64], word("40").as_slice());
        // array: length, then offset to the tuple relative to the element area
        assert_eq!(&encoded[64..96], word("01").as_slice());
        assert_eq!(&encoded[96..128], word("20").as_slice());
        // tuple: address, value, offset to bytes
        assert_eq!(&encoded[140..160], &[0x22; 20]);
        assert_eq!(&encoded[160..192], &[0u8; 32]);
        assert_eq!(&encoded[192..224], word("60").as_slice());
        assert_eq!(&encoded[224..256], word("04").as_slice());
        assert_eq!(&encoded[256..260], &[0xff; 4]);
        assert_eq!(encoded.len(), 288);
    }

    #[test]
    fn test_static_tuple_is_inlined() {
        let encoded = encode(&[
            Token::Tuple(vec![Token::Uint(5), Token::Uint(6)]),
            Token::Bytes(vec![1]),
        ]);
        assert_eq!(&encoded[0..32], word("05").as_slice());
        assert_eq!(&encoded[32..64], word("06").as_slice());
        assert_eq!(&encoded[64..96], word("60").as_slice());
    }

    #[test]
    fn test_function_call_prefix() {
        let data = encode_function_call("transfer(address,uint256)", &[
            Token::Address(Address::ZERO),
            Token::Uint(1000),
        ]);
        assert_eq!(&data[..4], &[0xa9, 0x05, 0x9c, 0xbb]);
        assert_eq!(data.len(), 68);
        assert_eq!(&data[36..68], word("03e8").as_slice());
    }
}
