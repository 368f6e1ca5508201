use tracing::debug;

use crate::error::ValidationError;
use crate::genesis::{properties, types};
use crate::graph::CreateResult;
use crate::graph::create_entity::default_values;
use crate::model::id::generate;
use crate::model::{CreateEntity, CreateRelation, Id, Op};
use crate::validate::Scope;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateTypeParams {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub cover: Option<String>,
    /// Properties instances of this type are expected to carry.
    pub properties: Vec<String>,
}

/// Builds the ops that create a type entity: the entity, its schema-type
/// relation, the cover relation, then one `properties` relation per
/// listed property.
pub fn create_type(params: CreateTypeParams) -> Result<CreateResult, ValidationError> {
    let scope = Scope::new("createType");
    let id = match params.id.as_deref() {
        Some(id) => scope.id("id", id)?,
        None => generate(),
    };
    let cover = scope.optional_id("cover", params.cover.as_deref())?;
    let property_ids = scope.ids("properties", &params.properties)?;

    let relation = |relation_type: Id, to: Id| {
        Op::CreateRelation(CreateRelation::new(generate(), relation_type, id, to))
    };

    let mut ops = Vec::with_capacity(3 + property_ids.len());
    ops.push(Op::CreateEntity(CreateEntity {
        id,
        values: default_values(params.name.as_deref(), params.description.as_deref()),
    }));
    ops.push(relation(properties::types(), types::schema_type()));
    if let Some(cover) = cover {
        ops.push(relation(properties::cover(), cover));
    }
    for property in property_ids {
        ops.push(relation(properties::properties(), property));
    }

    debug!(entity = %id, ops = ops.len(), "built type ops");
    Ok(CreateResult { id, ops })
}
