//! Operation types for graph state changes.
//!
//! Every change published to a space is expressed as an ordered list of ops.
//! Ops only ever hold validated [`Id`]s and normalized [`PropertyValue`]s.

use serde::{Deserialize, Serialize};

use crate::model::id::relation_entity_id;
use crate::model::{Id, PropertyValue};

/// An atomic graph mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Op {
    CreateEntity(CreateEntity),
    UpdateEntity(UpdateEntity),
    DeleteEntity(DeleteEntity),
    CreateRelation(CreateRelation),
    UpdateRelation(UpdateRelation),
    DeleteRelation(DeleteRelation),
}

impl Op {
    /// Returns the op type name (`"createEntity"`, ...).
    pub fn op_type(&self) -> &'static str {
        match self {
            Op::CreateEntity(_) => "createEntity",
            Op::UpdateEntity(_) => "updateEntity",
            Op::DeleteEntity(_) => "deleteEntity",
            Op::CreateRelation(_) => "createRelation",
            Op::UpdateRelation(_) => "updateRelation",
            Op::DeleteRelation(_) => "deleteRelation",
        }
    }

    /// Returns the entity or relation this op targets.
    pub fn subject(&self) -> Id {
        match self {
            Op::CreateEntity(op) => op.id,
            Op::UpdateEntity(op) => op.id,
            Op::DeleteEntity(op) => op.id,
            Op::CreateRelation(op) => op.id,
            Op::UpdateRelation(op) => op.id,
            Op::DeleteRelation(op) => op.id,
        }
    }
}

/// Creates an entity with its initial values.
///
/// If the entity already exists, the values are applied as sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateEntity {
    pub id: Id,
    pub values: Vec<PropertyValue>,
}

/// Updates an existing entity.
///
/// Application order within op:
/// 1. unset
/// 2. set
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateEntity {
    pub id: Id,
    /// Replace values for these properties.
    pub set: Vec<PropertyValue>,
    /// Clear values for these properties (optionally one language slot for text).
    pub unset: Vec<UnsetValue>,
}

impl UpdateEntity {
    pub fn new(id: Id) -> Self {
        Self {
            id,
            set: Vec::new(),
            unset: Vec::new(),
        }
    }

    /// Returns true if this update has no actual changes.
    pub fn is_empty(&self) -> bool {
        self.set.is_empty() && self.unset.is_empty()
    }
}

/// Which language slot an [`UnsetValue`] clears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "language", rename_all = "camelCase")]
pub enum UnsetLanguage {
    /// Clear every language variant of the property.
    #[default]
    All,
    /// Clear one language slot of a text property.
    Specific(Id),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UnsetValue {
    pub property: Id,
    pub language: UnsetLanguage,
}

impl UnsetValue {
    /// Clears all values for a property.
    pub fn all(property: Id) -> Self {
        Self {
            property,
            language: UnsetLanguage::All,
        }
    }

    /// Clears a specific language of a text property.
    pub fn language(property: Id, language: Id) -> Self {
        Self {
            property,
            language: UnsetLanguage::Specific(language),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteEntity {
    pub id: Id,
}

/// Creates a relation between two entities.
///
/// Also implicitly creates the reified relation entity if it doesn't exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRelation {
    pub id: Id,
    pub relation_type: Id,
    pub from: Id,
    pub to: Id,
    /// Optional space pin for the source entity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_space: Option<Id>,
    /// Optional version (edit id) pin for the source entity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_version: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_space: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_version: Option<Id>,
    /// Explicit reified entity id. If None, it is derived from the relation id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<Id>,
    /// Ordering position (fractional index).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

impl CreateRelation {
    /// Creates a relation with no pins, no explicit entity, and no position.
    pub fn new(id: Id, relation_type: Id, from: Id, to: Id) -> Self {
        Self {
            id,
            relation_type,
            from,
            to,
            from_space: None,
            from_version: None,
            to_space: None,
            to_version: None,
            entity: None,
            position: None,
        }
    }

    /// Computes the reified entity id.
    pub fn entity_id(&self) -> Id {
        match self.entity {
            Some(id) => id,
            None => relation_entity_id(&self.id),
        }
    }

    pub fn has_explicit_entity(&self) -> bool {
        self.entity.is_some()
    }
}

/// Fields that can be unset on a relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnsetRelationField {
    FromSpace,
    FromVersion,
    ToSpace,
    ToVersion,
    Position,
}

/// Updates a relation's mutable fields.
///
/// The structural fields (entity, type, from, to) are immutable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRelation {
    pub id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_space: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_version: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_space: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_version: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unset: Vec<UnsetRelationField>,
}

impl UpdateRelation {
    pub fn new(id: Id) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    /// Returns true if this update has no actual changes.
    pub fn is_empty(&self) -> bool {
        self.from_space.is_none()
            && self.from_version.is_none()
            && self.to_space.is_none()
            && self.to_version.is_none()
            && self.position.is_none()
            && self.unset.is_empty()
    }
}

/// Deletes a relation. The reified entity is left in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteRelation {
    pub id: Id,
}

/// Validates a relation position string.
///
/// Position strings must:
/// - Not be empty
/// - Only contain characters 0-9, A-Z, a-z
/// - Not exceed 64 characters
pub fn validate_position(pos: &str) -> Result<(), &'static str> {
    if pos.is_empty() {
        return Err("position cannot be empty");
    }
    if pos.len() > 64 {
        return Err("position exceeds 64 characters");
    }
    if !pos.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err("position contains invalid character");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Value;

    #[test]
    fn test_op_type_names() {
        let id = Id::from_bytes([1; 16]);
        assert_eq!(
            Op::CreateEntity(CreateEntity { id, values: vec![] }).op_type(),
            "createEntity"
        );
        assert_eq!(Op::UpdateEntity(UpdateEntity::new(id)).op_type(), "updateEntity");
        assert_eq!(Op::DeleteRelation(DeleteRelation { id }).op_type(), "deleteRelation");
        assert_eq!(Op::DeleteEntity(DeleteEntity { id }).subject(), id);
    }

    #[test]
    fn test_validate_position() {
        assert!(validate_position("abc123").is_ok());
        assert!(validate_position("aV").is_ok());
        assert!(validate_position(&"a".repeat(64)).is_ok());

        assert!(validate_position("").is_err());
        assert!(validate_position("abc-123").is_err());
        assert!(validate_position("abc 123").is_err());
        assert!(validate_position(&"a".repeat(65)).is_err());
    }

    #[test]
    fn test_update_entity_is_empty() {
        let mut update = UpdateEntity::new(Id::from_bytes([0; 16]));
        assert!(update.is_empty());

        update.unset.push(UnsetValue::all(Id::from_bytes([1; 16])));
        assert!(!update.is_empty());
    }

    #[test]
    fn test_relation_entity_derivation() {
        let mut rel = CreateRelation::new(
            Id::from_bytes([1; 16]),
            Id::from_bytes([2; 16]),
            Id::from_bytes([3; 16]),
            Id::from_bytes([4; 16]),
        );
        assert!(!rel.has_explicit_entity());
        assert_eq!(rel.entity_id(), relation_entity_id(&rel.id));

        rel.entity = Some(Id::from_bytes([5; 16]));
        assert_eq!(rel.entity_id(), Id::from_bytes([5; 16]));
    }

    #[test]
    fn test_op_serialization() {
        let id = Id::from_bytes([0xab; 16]);
        let op = Op::UpdateEntity(UpdateEntity {
            id,
            set: vec![PropertyValue {
                property: id,
                value: Value::Boolean { value: true },
            }],
            unset: vec![UnsetValue::all(id)],
        });

        let json = serde_json::to_value(&op).unwrap();
        assert_eq!(json["type"], "updateEntity");
        assert_eq!(json["id"], "abababababababababababababababab");
        assert_eq!(json["unset"][0]["language"]["type"], "all");

        let back: Op = serde_json::from_value(json).unwrap();
        assert_eq!(back, op);
    }
}
