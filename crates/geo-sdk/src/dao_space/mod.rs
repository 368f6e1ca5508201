//! DAO spaces: spaces governed by their editors.
//!
//! Edits to a DAO space are not published directly; they are wrapped in a
//! proposal that calls the space's `publish` once voting passes.

mod create_space;
mod propose_edit;

pub use create_space::{CreateSpaceParams, CreateSpaceResult, create_space};
pub use propose_edit::{ProposeEditParams, ProposeEditResult, propose_edit};

pub use crate::contracts::{VotingMode, VotingSettings};
