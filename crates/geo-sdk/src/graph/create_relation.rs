use tracing::debug;

use crate::error::ValidationError;
use crate::graph::CreateResult;
use crate::graph::create_entity::{CreateEntityParams, EntityRelations, build_entity};
use crate::model::id::generate;
use crate::model::{CreateRelation, Id, Op, PropertyValueParam, validate_position};
use crate::validate::Scope;

/// Content for the reified entity of a relation.
///
/// When any field besides `id` is set, the entity is created right after
/// the relation, under the relation's entity id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelationEntityParams {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub cover: Option<String>,
    pub values: Vec<PropertyValueParam>,
    /// Relations from the reified entity, keyed by relation type.
    pub relations: Vec<(String, EntityRelations)>,
    pub types: Vec<String>,
}

impl RelationEntityParams {
    fn has_content(&self) -> bool {
        self.name.is_some()
            || self.description.is_some()
            || self.cover.is_some()
            || !self.values.is_empty()
            || !self.relations.is_empty()
            || !self.types.is_empty()
    }

    fn to_entity_params(&self) -> CreateEntityParams {
        CreateEntityParams {
            id: None,
            name: self.name.clone(),
            description: self.description.clone(),
            cover: self.cover.clone(),
            values: self.values.clone(),
            relations: self.relations.clone(),
            types: self.types.clone(),
        }
    }
}

/// A relation from an entity whose source and type are given by context.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityRelationParams {
    pub id: Option<String>,
    pub to_entity: String,
    pub to_space: Option<String>,
    pub to_version: Option<String>,
    pub from_space: Option<String>,
    pub from_version: Option<String>,
    pub position: Option<String>,
    pub entity: RelationEntityParams,
}

impl EntityRelationParams {
    /// A plain relation to `to_entity`.
    pub fn to(to_entity: impl Into<String>) -> Self {
        Self {
            to_entity: to_entity.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateRelationParams {
    pub id: Option<String>,
    pub from_entity: String,
    pub to_entity: String,
    pub relation_type: String,
    pub to_space: Option<String>,
    pub to_version: Option<String>,
    pub from_space: Option<String>,
    pub from_version: Option<String>,
    pub position: Option<String>,
    pub entity: RelationEntityParams,
}

/// Builds the ops that create a relation, followed by the ops creating its
/// reified entity when entity content is supplied.
pub fn create_relation(params: CreateRelationParams) -> Result<CreateResult, ValidationError> {
    let scope = Scope::new("createRelation");
    let from = scope.id("fromEntity", &params.from_entity)?;
    let relation_type = scope.id("type", &params.relation_type)?;

    let relation = EntityRelationParams {
        id: params.id,
        to_entity: params.to_entity,
        to_space: params.to_space,
        to_version: params.to_version,
        from_space: params.from_space,
        from_version: params.from_version,
        position: params.position,
        entity: params.entity,
    };
    let (id, ops) = build_relation(from, relation_type, &relation, &scope)?;
    Ok(CreateResult { id, ops })
}

/// Validates `params` and builds the relation ops. Returns the relation id.
pub(crate) fn build_relation(
    from: Id,
    relation_type: Id,
    params: &EntityRelationParams,
    scope: &Scope,
) -> Result<(Id, Vec<Op>), ValidationError> {
    let id = match params.id.as_deref() {
        Some(id) => scope.id("id", id)?,
        None => generate(),
    };
    let to = scope.id("toEntity", &params.to_entity)?;

    let mut relation = CreateRelation::new(id, relation_type, from, to);
    relation.from_space = scope.optional_id("fromSpace", params.from_space.as_deref())?;
    relation.from_version = scope.optional_id("fromVersion", params.from_version.as_deref())?;
    relation.to_space = scope.optional_id("toSpace", params.to_space.as_deref())?;
    relation.to_version = scope.optional_id("toVersion", params.to_version.as_deref())?;
    relation.entity = scope.optional_id("entityId", params.entity.id.as_deref())?;

    if let Some(position) = &params.position {
        validate_position(position)
            .map_err(|reason| ValidationError::invalid_argument(scope.label("position"), reason))?;
        relation.position = Some(position.clone());
    }

    let entity_ops = if params.entity.has_content() {
        let entity_params = params.entity.to_entity_params();
        build_entity(relation.entity_id(), &entity_params, &scope.within("entity"))?.ops
    } else {
        Vec::new()
    };

    let mut ops = Vec::with_capacity(1 + entity_ops.len());
    ops.push(Op::CreateRelation(relation));
    ops.extend(entity_ops);

    debug!(relation = %id, %from, %to, "built relation ops");
    Ok((id, ops))
}
