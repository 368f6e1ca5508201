use crate::error::ValidationError;
use crate::graph::CreateResult;
use crate::model::{DeleteRelation, Op};
use crate::validate::Scope;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteRelationParams {
    pub id: String,
}

/// Builds a single `DeleteRelation` op. The reified entity is left alone.
pub fn delete_relation(params: DeleteRelationParams) -> Result<CreateResult, ValidationError> {
    let id = Scope::new("deleteRelation").id("id", &params.id)?;
    Ok(CreateResult {
        id,
        ops: vec![Op::DeleteRelation(DeleteRelation { id })],
    })
}
