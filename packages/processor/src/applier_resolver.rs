//! Style Applier Resolver
//!
//! For any component type, finds the nearest ancestor type (inclusive) with
//! a registered style applier by walking the declared supertype chain.
//! Results are memoized for every type visited on the walk, so repeated
//! queries sharing a chain suffix are O(1) after the first resolution.
//!
//! A chain that terminates without a match is a configuration error the
//! generator cannot route around, so it aborts the run rather than being
//! reported as a recoverable diagnostic.

use serde::Serialize;
use smallvec::SmallVec;
use std::collections::HashMap;

use crate::elements::{ElementId, ElementModel, TypeId};
use crate::error::{ProcessorError, Result};
use crate::names::ClassName;
use crate::styleable::StyleableRegistry;

/// Resolution result: which generated class is responsible for applying
/// styles to the queried component type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleApplierDetails {
    /// The annotated element that established the styleable.
    pub element: ElementId,
    pub class_name: ClassName,
}

pub struct StyleApplierResolver<'a> {
    registry: &'a StyleableRegistry,
    memo: HashMap<TypeId, StyleApplierDetails>,
}

impl<'a> StyleApplierResolver<'a> {
    pub fn new(registry: &'a StyleableRegistry) -> Self {
        StyleApplierResolver {
            registry,
            memo: HashMap::new(),
        }
    }

    pub fn resolve(&mut self, model: &ElementModel, ty: TypeId) -> Result<StyleApplierDetails> {
        let mut path: SmallVec<[TypeId; 8]> = SmallVec::new();
        let mut current = ty;
        let details = loop {
            if let Some(hit) = self.memo.get(&current) {
                break hit.clone();
            }
            path.push(current);
            if let Some(info) = self.registry.find(current) {
                break StyleApplierDetails {
                    element: info.element,
                    class_name: info.applier_class_name.clone(),
                };
            }
            current = match model.super_type(current) {
                Some(parent) => parent,
                None => {
                    return Err(ProcessorError::NoStyleableAncestor {
                        type_name: model.qualified_name(ty).to_string(),
                        known_styleables: self.registry.known_types(model),
                    })
                }
            };
        };
        // Populate every visited type, not just the query key, so each
        // distinct chain is only walked once across all queries.
        for visited in path {
            self.memo.insert(visited, details.clone());
        }
        Ok(details)
    }

    /// Memoized result for `ty`, if a prior resolution visited it.
    pub fn memoized(&self, ty: TypeId) -> Option<&StyleApplierDetails> {
        self.memo.get(&ty)
    }
}
