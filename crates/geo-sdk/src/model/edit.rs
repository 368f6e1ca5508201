//! Edit structure for batched operations.
//!
//! An edit is a named, authored batch of ops published as one
//! content-addressed unit.

use serde::{Deserialize, Serialize};

use crate::config::Network;
use crate::model::{Id, Op};

/// A batch of operations handed to the publisher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edit {
    /// Human-readable name.
    pub name: String,
    /// Operations in this edit, in application order.
    pub ops: Vec<Op>,
    /// The author's personal space id.
    pub author: Id,
    pub network: Network,
}

impl Edit {
    /// Creates a new empty edit.
    pub fn new(name: impl Into<String>, author: Id) -> Self {
        Self {
            name: name.into(),
            ops: Vec::new(),
            author,
            network: Network::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}
