//! Resource Identifiers
//!
//! The scanner that maps raw R references to stable identifiers is an
//! external collaborator; this module only defines the boundary. A
//! table-backed implementation is provided for wiring the processor up
//! without a real scanner.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::elements::ElementId;

/// Opaque, stable identifier for one R entry. `code` is the source
/// reference the emitter splices into generated files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceId {
    pub value: i32,
    pub code: String,
}

#[derive(Debug, Error)]
pub enum ResourceError {
    /// The raw reference does not correspond to any known R value.
    #[error("resource reference {raw} does not match any known R value")]
    UnknownReference { raw: i32 },
}

pub trait ResourceResolver {
    /// Resolves a raw annotation value into a resource identifier.
    /// `Ok(None)` means the resolver could not map the reference but has
    /// already reported the problem itself.
    fn resolve(
        &self,
        annotation: &str,
        element: ElementId,
        raw: i32,
    ) -> Result<Option<ResourceId>, ResourceError>;
}

/// In-memory resolver backed by a fixed table of known R values.
#[derive(Debug, Default)]
pub struct ResourceTable {
    entries: HashMap<i32, ResourceId>,
}

impl ResourceTable {
    pub fn new() -> Self {
        ResourceTable::default()
    }

    pub fn insert(&mut self, value: i32, code: &str) {
        self.entries.insert(
            value,
            ResourceId {
                value,
                code: code.to_string(),
            },
        );
    }
}

impl ResourceResolver for ResourceTable {
    fn resolve(
        &self,
        _annotation: &str,
        _element: ElementId,
        raw: i32,
    ) -> Result<Option<ResourceId>, ResourceError> {
        match self.entries.get(&raw) {
            Some(id) => Ok(Some(id.clone())),
            None => Err(ResourceError::UnknownReference { raw }),
        }
    }
}
