use tracing::debug;

use crate::error::ValidationError;
use crate::genesis::{data_types, properties, types};
use crate::graph::CreateResult;
use crate::graph::create_entity::default_values;
use crate::model::id::generate;
use crate::model::{CreateEntity, CreateRelation, DataType, Id, Op};
use crate::validate::Scope;

#[derive(Debug, Clone, PartialEq)]
pub struct CreatePropertyParams {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub cover: Option<String>,
    pub data_type: DataType,
    /// Properties of the relation's reified entity. `Relation` only.
    pub properties: Vec<String>,
    /// Types a relation may point at. `Relation` only.
    pub relation_value_types: Vec<String>,
}

impl CreatePropertyParams {
    pub fn new(data_type: DataType) -> Self {
        Self {
            id: None,
            name: None,
            description: None,
            cover: None,
            data_type,
            properties: Vec::new(),
            relation_value_types: Vec::new(),
        }
    }

    pub fn named(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(data_type)
        }
    }
}

/// Builds the ops that create a property entity.
///
/// Op order: the entity, its `Property` type relation, the data-type
/// relation, the cover relation, then for relation properties one relation
/// per listed property followed by one per relation value type.
pub fn create_property(params: CreatePropertyParams) -> Result<CreateResult, ValidationError> {
    let scope = Scope::new("createProperty");
    let id = match params.id.as_deref() {
        Some(id) => scope.id("id", id)?,
        None => generate(),
    };
    let cover = scope.optional_id("cover", params.cover.as_deref())?;
    let property_ids = scope.ids("properties", &params.properties)?;
    let value_type_ids = scope.ids("relationValueTypes", &params.relation_value_types)?;

    if params.data_type != DataType::Relation {
        if !property_ids.is_empty() {
            return Err(ValidationError::invalid_argument(
                scope.label("properties"),
                "only relation properties can list properties",
            ));
        }
        if !value_type_ids.is_empty() {
            return Err(ValidationError::invalid_argument(
                scope.label("relationValueTypes"),
                "only relation properties can list relation value types",
            ));
        }
    }

    let relation = |relation_type: Id, to: Id| {
        Op::CreateRelation(CreateRelation::new(generate(), relation_type, id, to))
    };

    let mut ops = Vec::with_capacity(4 + property_ids.len() + value_type_ids.len());
    ops.push(Op::CreateEntity(CreateEntity {
        id,
        values: default_values(params.name.as_deref(), params.description.as_deref()),
    }));
    ops.push(relation(properties::types(), types::property()));
    ops.push(relation(properties::data_type(), data_types::id_for(params.data_type)));
    if let Some(cover) = cover {
        ops.push(relation(properties::cover(), cover));
    }
    for property in property_ids {
        ops.push(relation(types::property(), property));
    }
    for value_type in value_type_ids {
        ops.push(relation(properties::relation_value_types(), value_type));
    }

    debug!(
        entity = %id,
        data_type = params.data_type.as_str(),
        ops = ops.len(),
        "built property ops"
    );
    Ok(CreateResult { id, ops })
}
