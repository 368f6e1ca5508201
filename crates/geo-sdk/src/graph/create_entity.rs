use tracing::debug;

use crate::error::ValidationError;
use crate::genesis::{languages, properties};
use crate::graph::CreateResult;
use crate::graph::create_relation::{EntityRelationParams, build_relation};
use crate::model::id::generate;
use crate::model::{CreateEntity, CreateRelation, Id, Op, PropertyValue, PropertyValueParam, Value};
use crate::validate::{Scope, normalize_property_values};

/// One or several relations of the same relation type.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityRelations {
    One(EntityRelationParams),
    Many(Vec<EntityRelationParams>),
}

impl EntityRelations {
    pub fn as_slice(&self) -> &[EntityRelationParams] {
        match self {
            EntityRelations::One(relation) => std::slice::from_ref(relation),
            EntityRelations::Many(relations) => relations,
        }
    }
}

impl From<EntityRelationParams> for EntityRelations {
    fn from(relation: EntityRelationParams) -> Self {
        EntityRelations::One(relation)
    }
}

impl From<Vec<EntityRelationParams>> for EntityRelations {
    fn from(relations: Vec<EntityRelationParams>) -> Self {
        EntityRelations::Many(relations)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateEntityParams {
    /// Entity id; generated when omitted.
    pub id: Option<String>,
    /// Stored as English text under the name property.
    pub name: Option<String>,
    /// Stored as English text under the description property.
    pub description: Option<String>,
    /// Image entity linked through the cover relation.
    pub cover: Option<String>,
    pub values: Vec<PropertyValueParam>,
    /// Relation type id mapped to the relations of that type, in input order.
    pub relations: Vec<(String, EntityRelations)>,
    pub types: Vec<String>,
}

/// Builds the ops that create an entity.
///
/// Op order: the entity itself, one `types` relation per type, the cover
/// relation, then the relations from `relations`.
pub fn create_entity(params: CreateEntityParams) -> Result<CreateResult, ValidationError> {
    let scope = Scope::new("createEntity");
    let id = match params.id.as_deref() {
        Some(id) => scope.id("id", id)?,
        None => generate(),
    };
    build_entity(id, &params, &scope)
}

/// Builds entity ops for an already-resolved `id`. Shared with the type,
/// property, and relation-entity builders.
pub(crate) fn build_entity(
    id: Id,
    params: &CreateEntityParams,
    scope: &Scope,
) -> Result<CreateResult, ValidationError> {
    let cover = scope.optional_id("cover", params.cover.as_deref())?;
    let types = scope.ids("types", &params.types)?;
    let explicit_values = normalize_property_values(&params.values, scope, None)?;

    let relations_scope = scope.within("relations");
    let mut relation_ops = Vec::new();
    for (relation_type, relations) in &params.relations {
        let relation_type = scope.id("relations", relation_type)?;
        for relation in relations.as_slice() {
            let (_, ops) = build_relation(id, relation_type, relation, &relations_scope)?;
            relation_ops.extend(ops);
        }
    }

    let mut values = default_values(params.name.as_deref(), params.description.as_deref());
    values.extend(explicit_values);

    let mut ops = Vec::with_capacity(2 + types.len() + relation_ops.len());
    ops.push(Op::CreateEntity(CreateEntity { id, values }));
    for type_id in types {
        ops.push(Op::CreateRelation(CreateRelation::new(
            generate(),
            properties::types(),
            id,
            type_id,
        )));
    }
    if let Some(cover) = cover {
        ops.push(Op::CreateRelation(CreateRelation::new(
            generate(),
            properties::cover(),
            id,
            cover,
        )));
    }
    ops.extend(relation_ops);

    debug!(entity = %id, ops = ops.len(), "built entity ops");
    Ok(CreateResult { id, ops })
}

/// Name and description as English text values. Empty strings are skipped.
pub(crate) fn default_values(name: Option<&str>, description: Option<&str>) -> Vec<PropertyValue> {
    let english = languages::english();
    let text = |property: Id, value: &str| PropertyValue {
        property,
        value: Value::Text {
            value: value.to_string(),
            language: Some(english),
        },
    };

    let mut values = Vec::with_capacity(2);
    if let Some(name) = name.filter(|n| !n.is_empty()) {
        values.push(text(properties::name(), name));
    }
    if let Some(description) = description.filter(|d| !d.is_empty()) {
        values.push(text(properties::description(), description));
    }
    values
}
