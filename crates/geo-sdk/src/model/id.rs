//! UUID-based identifiers for Geo entities, relations, properties, and spaces.
//!
//! Identifiers are 16 raw bytes. Two textual forms are accepted as input:
//! a dashed UUID (`8-4-4-4-12`) or 32 hex characters without dashes, in
//! either case. Output is always the dashless lowercase form.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use rand::RngCore;
use regex::Regex;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::error::ValidationError;

lazy_static! {
    static ref UUID_DASHED_REGEX: Regex = Regex::new(
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$"
    )
    .unwrap();
    static ref UUID_DASHLESS_REGEX: Regex = Regex::new(r"^[0-9a-fA-F]{32}$").unwrap();
}

/// A validated 16-byte identifier.
///
/// Construct one with [`Id::checked`] (or `str::parse`) at every boundary
/// where a loosely typed string enters the crate; past that point the bytes
/// are known-good.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Id([u8; 16]);

impl Id {
    /// The zero/nil UUID.
    pub const NIL: Id = Id([0u8; 16]);

    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Id(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    pub const fn into_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Validates `value` and converts it into an `Id`.
    ///
    /// `context` names the parameter path and is embedded into the error,
    /// e.g. ``"`unit` in `values` in `createEntity`"``.
    pub fn checked(value: &str, context: &str) -> Result<Id, ValidationError> {
        to_binary(value, context).map(Id)
    }

    /// Formats the id in the dashed `8-4-4-4-12` form.
    pub fn to_dashed(&self) -> String {
        uuid::Uuid::from_bytes(self.0).hyphenated().to_string()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_id(self))
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", format_id(self))
    }
}

impl FromStr for Id {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Id::checked(s, "`id`")
    }
}

impl From<[u8; 16]> for Id {
    fn from(bytes: [u8; 16]) -> Self {
        Id(bytes)
    }
}

impl From<Id> for [u8; 16] {
    fn from(id: Id) -> Self {
        id.0
    }
}

impl From<Id> for String {
    fn from(id: Id) -> Self {
        format_id(&id)
    }
}

impl AsRef<[u8]> for Id {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for Id {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_id(self))
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor;

        impl Visitor<'_> for IdVisitor {
            type Value = Id;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a dashed UUID or 32 hex characters")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Id, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(IdVisitor)
    }
}

/// Returns true if `value` is a dashed UUID or 32 hex characters.
pub fn is_valid(value: &str) -> bool {
    UUID_DASHED_REGEX.is_match(value) || UUID_DASHLESS_REGEX.is_match(value)
}

/// Returns true if `value` is exactly 32 hex characters (no dashes).
pub fn is_dashless(value: &str) -> bool {
    UUID_DASHLESS_REGEX.is_match(value)
}

/// Fails with an `InvalidId` error naming `value` and `context` unless
/// `value` is a valid id.
pub fn assert_valid(value: &str, context: &str) -> Result<(), ValidationError> {
    if is_valid(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidId {
            value: value.to_string(),
            context: context.to_string(),
        })
    }
}

/// Converts an id string into its 16-byte binary form.
///
/// The dashed form has its dashes stripped before hex decoding.
pub fn to_binary(value: &str, context: &str) -> Result<[u8; 16], ValidationError> {
    assert_valid(value, context)?;
    parse_id(value).map(Id::into_bytes).ok_or_else(|| ValidationError::InvalidId {
        value: value.to_string(),
        context: context.to_string(),
    })
}

/// Generates a fresh random id using the thread-local RNG.
pub fn generate() -> Id {
    generate_with(&mut rand::thread_rng())
}

/// Generates a fresh random (UUID v4) id from the given randomness source.
pub fn generate_with<R: RngCore + ?Sized>(rng: &mut R) -> Id {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    Id(uuid::Builder::from_random_bytes(bytes).into_uuid().into_bytes())
}

/// Derives a UUIDv8 from input bytes using SHA-256.
///
/// ```text
/// hash = SHA-256(input_bytes)[0:16]
/// hash[6] = (hash[6] & 0x0F) | 0x80  // version 8
/// hash[8] = (hash[8] & 0x3F) | 0x80  // RFC 4122 variant
/// ```
pub fn derived_uuid(input: &[u8]) -> Id {
    let hash = Sha256::digest(input);
    let mut id = [0u8; 16];
    id.copy_from_slice(&hash[..16]);

    id[6] = (id[6] & 0x0F) | 0x80;
    id[8] = (id[8] & 0x3F) | 0x80;

    Id(id)
}

const RELATION_ENTITY_PREFIX: &[u8] = b"grc20:relation-entity:";

/// Derives the reified entity id of a relation that has no explicit entity.
///
/// ```text
/// entity_id = derived_uuid("grc20:relation-entity:" || relation_id)
/// ```
pub fn relation_entity_id(relation_id: &Id) -> Id {
    let mut input = Vec::with_capacity(RELATION_ENTITY_PREFIX.len() + 16);
    input.extend_from_slice(RELATION_ENTITY_PREFIX);
    input.extend_from_slice(relation_id.as_bytes());
    derived_uuid(&input)
}

/// Formats an id as dashless lowercase hex.
pub fn format_id(id: &Id) -> String {
    hex::encode(id.0)
}

/// Parses an id from hex, with or without dashes.
///
/// This is lenient about dash placement; use [`Id::checked`] for
/// boundary validation.
pub fn parse_id(s: &str) -> Option<Id> {
    let hex: String = s.chars().filter(|c| *c != '-').collect();
    if hex.len() != 32 {
        return None;
    }

    let mut id = [0u8; 16];
    hex::decode_to_slice(hex, &mut id).ok()?;
    Some(Id(id))
}
