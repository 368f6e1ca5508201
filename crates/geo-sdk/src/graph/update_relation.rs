use tracing::debug;

use crate::error::ValidationError;
use crate::graph::CreateResult;
use crate::model::{Op, UnsetRelationField, UpdateRelation, validate_position};
use crate::validate::Scope;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateRelationParams {
    pub id: String,
    pub from_space: Option<String>,
    pub from_version: Option<String>,
    pub to_space: Option<String>,
    pub to_version: Option<String>,
    pub position: Option<String>,
}

/// Builds a single `UpdateRelation` op setting the given fields.
pub fn update_relation(params: UpdateRelationParams) -> Result<CreateResult, ValidationError> {
    let scope = Scope::new("updateRelation");
    let id = scope.id("id", &params.id)?;

    let mut op = UpdateRelation::new(id);
    op.from_space = scope.optional_id("fromSpace", params.from_space.as_deref())?;
    op.from_version = scope.optional_id("fromVersion", params.from_version.as_deref())?;
    op.to_space = scope.optional_id("toSpace", params.to_space.as_deref())?;
    op.to_version = scope.optional_id("toVersion", params.to_version.as_deref())?;
    if let Some(position) = params.position {
        validate_position(&position)
            .map_err(|reason| ValidationError::invalid_argument(scope.label("position"), reason))?;
        op.position = Some(position);
    }

    debug!(relation = %id, "built relation update op");
    Ok(CreateResult {
        id,
        ops: vec![Op::UpdateRelation(op)],
    })
}

/// Selects the relation fields to clear.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnsetRelationParams {
    pub id: String,
    pub from_space: bool,
    pub from_version: bool,
    pub to_space: bool,
    pub to_version: bool,
    pub position: bool,
}

/// Builds a single `UpdateRelation` op clearing the selected fields.
pub fn unset_relation_fields(params: UnsetRelationParams) -> Result<CreateResult, ValidationError> {
    let id = Scope::new("unsetRelationFields").id("id", &params.id)?;

    let selected = [
        (params.from_space, UnsetRelationField::FromSpace),
        (params.from_version, UnsetRelationField::FromVersion),
        (params.to_space, UnsetRelationField::ToSpace),
        (params.to_version, UnsetRelationField::ToVersion),
        (params.position, UnsetRelationField::Position),
    ];

    let mut op = UpdateRelation::new(id);
    op.unset = selected
        .into_iter()
        .filter_map(|(set, field)| set.then_some(field))
        .collect();

    Ok(CreateResult {
        id,
        ops: vec![Op::UpdateRelation(op)],
    })
}
