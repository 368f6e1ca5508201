//! Personal spaces: spaces owned by a single account.
//!
//! The owner publishes directly through the space registry, so edits skip
//! governance and carry an empty signature.

mod create_space;
mod publish_edit;

pub use create_space::{CreateSpaceResult, create_space, create_space_on};
pub use publish_edit::{PublishEditParams, PublishEditResult, publish_edit, space_id_to_bytes16};
