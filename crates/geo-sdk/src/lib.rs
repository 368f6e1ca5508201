//! Geo SDK: build GRC-20 edits and the calldata that publishes them.
//!
//! This crate turns loosely typed caller input into validated graph ops and
//! encodes the contract calls that record an edit in a Geo space.
//!
//! # Overview
//!
//! - **Op builders** validate every id and value before producing ops, so a
//!   failed call never yields a partial batch
//! - **Publishing** of the serialized edit is delegated to an
//!   [`EditPublisher`], which returns a content identifier
//! - **Calldata** for personal spaces, DAO spaces and proposals is encoded
//!   in-crate with the contract ABI
//!
//! # Quick Start
//!
//! ```rust
//! use geo_sdk::graph::{create_entity, CreateEntityParams};
//! use geo_sdk::model::{PropertyValueParam, TypedValue};
//!
//! let entity = create_entity(CreateEntityParams {
//!     name: Some("Alice".to_string()),
//!     values: vec![PropertyValueParam::new(
//!         "1b2c4a3fb1d24f6a8c3e9f7d5a6b4c2e",
//!         TypedValue::integer(42i64),
//!     )],
//!     types: vec!["96f859efa1ca4b229372c86ad58b694b".to_string()],
//!     ..Default::default()
//! })
//! .unwrap();
//!
//! // entity, then its type relation
//! assert_eq!(entity.ops.len(), 2);
//!
//! let err = create_entity(CreateEntityParams {
//!     cover: Some("not-an-id".to_string()),
//!     ..Default::default()
//! })
//! .unwrap_err();
//! assert_eq!(err.to_string(), "Invalid id: \"not-an-id\" for `cover` in `createEntity`");
//! ```
//!
//! # Modules
//!
//! - [`model`]: Ids, values, ops and edits
//! - [`graph`]: Op builders
//! - [`validate`]: Value normalization
//! - [`codec`]: Contract ABI and fixed-width hex
//! - [`contracts`]: Space registry, DAO space and factory calldata
//! - [`personal_space`], [`dao_space`]: Publish and propose flows
//! - [`genesis`]: Well-known system ids
//! - [`config`]: Networks and contract addresses
//! - [`error`]: Error types

pub mod codec;
pub mod config;
pub mod contracts;
pub mod dao_space;
pub mod error;
pub mod genesis;
pub mod graph;
pub mod model;
pub mod personal_space;
pub mod publish;
pub mod validate;

// Re-export commonly used types at crate root
pub use codec::Address;
pub use config::{Network, NetworkConfig};
pub use error::{Error, ErrorKind, PublishError, Result, ValidationError};
pub use graph::CreateResult;
pub use model::{
    DataType, DecimalMantissa, Edit, EmbeddingSubType, Id, IntegerValue, Op, PropertyValue,
    PropertyValueParam, TypedValue, Value,
};
pub use publish::{EditPublisher, PublishedEdit};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
