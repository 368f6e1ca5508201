//! Operation builders.
//!
//! Each builder is a pure function from caller parameters to a fresh list
//! of ops plus the subject id used (caller-supplied or freshly generated).
//! Every id is validated before any op is constructed, so a failing call
//! never yields a partial batch.

mod create_entity;
mod create_property;
mod create_relation;
mod create_type;
mod delete_entity;
mod delete_relation;
mod update_entity;
mod update_relation;

pub use create_entity::{CreateEntityParams, EntityRelations, create_entity};
pub use create_property::{CreatePropertyParams, create_property};
pub use create_relation::{
    CreateRelationParams, EntityRelationParams, RelationEntityParams, create_relation,
};
pub use create_type::{CreateTypeParams, create_type};
pub use delete_entity::{DeleteEntityParams, delete_entity};
pub use delete_relation::{DeleteRelationParams, delete_relation};
pub use update_entity::{
    UnsetEntityValuesParams, UnsetLanguageParam, UnsetPropertyParam, UpdateEntityParams,
    unset_entity_values, update_entity,
};
pub use update_relation::{
    UnsetRelationParams, UpdateRelationParams, unset_relation_fields, update_relation,
};

use crate::model::{Id, Op};

/// The subject id of a builder call and the ops it produced, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateResult {
    pub id: Id,
    pub ops: Vec<Op>,
}
