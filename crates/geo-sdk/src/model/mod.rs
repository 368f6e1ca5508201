//! Data model types for Geo edits.
//!
//! This module contains the core types the builders produce:
//! - Identifiers (UUIDs)
//! - Values (raw caller input and their validated form)
//! - Operations (state changes)
//! - Edits (batched operations)
//! - Builders (ergonomic construction)

pub mod builder;
pub mod edit;
pub mod id;
pub mod op;
pub mod value;

pub use builder::PropertyValuesBuilder;
pub use edit::Edit;
pub use id::{Id, derived_uuid, format_id, parse_id, relation_entity_id};
pub use op::{
    CreateEntity, CreateRelation, DeleteEntity, DeleteRelation, Op, UnsetLanguage,
    UnsetRelationField, UnsetValue, UpdateEntity, UpdateRelation, validate_position,
};
pub use value::{
    DataType, DecimalMantissa, EmbeddingSubType, IntegerValue, PropertyValue, PropertyValueParam,
    TypedValue, Value,
};
