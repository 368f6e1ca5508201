use crate::error::ValidationError;
use crate::graph::CreateResult;
use crate::model::{DeleteEntity, Op};
use crate::validate::Scope;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteEntityParams {
    pub id: String,
}

/// Builds a single `DeleteEntity` op.
pub fn delete_entity(params: DeleteEntityParams) -> Result<CreateResult, ValidationError> {
    let id = Scope::new("deleteEntity").id("id", &params.id)?;
    Ok(CreateResult {
        id,
        ops: vec![Op::DeleteEntity(DeleteEntity { id })],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_entity() {
        let result = delete_entity(DeleteEntityParams {
            id: "5871e8f7-b71e-4c0f-a8b1-d7bf3e4c2a91".to_string(),
        })
        .unwrap();

        assert_eq!(result.id.to_string(), "5871e8f7b71e4c0fa8b1d7bf3e4c2a91");
        assert_eq!(result.ops, vec![Op::DeleteEntity(DeleteEntity { id: result.id })]);

        let err = delete_entity(DeleteEntityParams {
            id: "invalid".to_string(),
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "Invalid id: \"invalid\" for `id` in `deleteEntity`");
    }
}
