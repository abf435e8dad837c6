//! Processor Driver
//!
//! Single synchronous pass per compiler invocation: extract styleables,
//! build the registry and resolver, extract attributes, then resolve which
//! generated applier class receives each attribute binding. The output is
//! what the (external) emitter consumes; collected diagnostics ride along
//! so the build system can fail the run after all independent errors have
//! surfaced.

use indexmap::IndexMap;
use serde::Serialize;

use crate::applier_resolver::{StyleApplierDetails, StyleApplierResolver};
use crate::attr_extractor::{AttrExtractor, AttrInfo};
use crate::diagnostics::Diagnostics;
use crate::elements::{ElementId, ElementModel};
use crate::error::{ProcessorError, Result};
use crate::resources::ResourceResolver;
use crate::styleable::StyleableRegistry;

/// All attribute bindings routed to one generated applier class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleApplierBindings {
    pub applier: StyleApplierDetails,
    pub attrs: Vec<AttrInfo>,
}

#[derive(Debug, Serialize)]
pub struct ProcessorOutput {
    /// Keyed by applier qualified name, in declaration order.
    pub bindings: IndexMap<String, StyleApplierBindings>,
    pub diagnostics: Diagnostics,
}

pub struct Processor<'a> {
    model: &'a ElementModel,
    resources: &'a dyn ResourceResolver,
}

impl<'a> Processor<'a> {
    pub fn new(model: &'a ElementModel, resources: &'a dyn ResourceResolver) -> Self {
        Processor { model, resources }
    }

    /// Runs the pass over the host-discovered annotated elements.
    pub fn process(
        &self,
        styleable_candidates: &[ElementId],
        attr_candidates: &[ElementId],
    ) -> Result<ProcessorOutput> {
        let mut diagnostics = Diagnostics::new();
        let registry = StyleableRegistry::extract(self.model, styleable_candidates, &mut diagnostics)?;
        let mut resolver = StyleApplierResolver::new(&registry);
        let extractor = AttrExtractor::new(self.model, self.resources);

        // One bucket per declared styleable so appliers without attributes
        // of their own are still emitted.
        let mut bindings: IndexMap<String, StyleApplierBindings> = IndexMap::new();
        for info in registry.styleables() {
            bindings.insert(
                info.applier_class_name.qualified(),
                StyleApplierBindings {
                    applier: StyleApplierDetails {
                        element: info.element,
                        class_name: info.applier_class_name.clone(),
                    },
                    attrs: Vec::new(),
                },
            );
        }

        for &id in attr_candidates {
            let Some(attr) = extractor.extract(id, &mut diagnostics)? else {
                continue;
            };
            let owner = self.model.element(id).enclosing.ok_or_else(|| {
                ProcessorError::UnsupportedDeclaration {
                    element: self.model.element(id).name.clone(),
                }
            })?;
            let details = resolver.resolve(self.model, owner)?;
            bindings
                .entry(details.class_name.qualified())
                .or_insert_with(|| StyleApplierBindings {
                    applier: details.clone(),
                    attrs: Vec::new(),
                })
                .attrs
                .push(attr);
        }

        Ok(ProcessorOutput {
            bindings,
            diagnostics,
        })
    }
}
