//! Byte-level encodings for on-chain calls.

pub mod abi;
pub mod bytes;

pub use abi::{Token, Writer, encode, encode_function_call, keccak256, selector};
pub use bytes::{
    Address, bytes16_to_bytes32_left_aligned, decode_bytes16, decode_bytes32, is_bytes16_hex,
    is_bytes32_hex, to_bytes16, to_prefixed_hex,
};
