//! Styleable Registry
//!
//! The set of component types declared eligible for a generated style
//! applier, built once per run from `@Styleable`-annotated class elements
//! and immutable afterward. Lookup is by type identity, never by name.

use serde::Serialize;

use crate::diagnostics::Diagnostics;
use crate::elements::{ElementId, ElementKind, ElementModel, TypeId};
use crate::error::{ProcessorError, Result};
use crate::names::ClassName;

pub const STYLE_APPLIER_SUFFIX: &str = "StyleApplier";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleableInfo {
    /// The annotated class declaration that established the styleable.
    pub element: ElementId,
    pub component_type: TypeId,
    pub applier_class_name: ClassName,
}

#[derive(Debug, Default)]
pub struct StyleableRegistry {
    styleables: Vec<StyleableInfo>,
}

impl StyleableRegistry {
    /// Builds the registry from the host-discovered `@Styleable` candidates.
    /// At most one styleable may exist per distinct component type; later
    /// duplicates are rejected with a diagnostic and the first wins.
    pub fn extract(
        model: &ElementModel,
        candidates: &[ElementId],
        diagnostics: &mut Diagnostics,
    ) -> Result<Self> {
        let mut styleables: Vec<StyleableInfo> = Vec::new();
        for &id in candidates {
            let el = model.element(id);
            let ElementKind::Type { id: component_type } = el.kind else {
                return Err(ProcessorError::UnsupportedDeclaration {
                    element: el.name.clone(),
                });
            };
            if el.visibility.is_private_or_protected() {
                diagnostics.log_error(
                    id,
                    "Classes annotated with @Styleable can't be private or protected.",
                );
                continue;
            }
            if styleables.iter().any(|s| s.component_type == component_type) {
                diagnostics.log_error(
                    id,
                    format!(
                        "Duplicate @Styleable for {}.",
                        model.qualified_name(component_type)
                    ),
                );
                continue;
            }
            let applier_class_name = ClassName::parse(model.qualified_name(component_type))?
                .peer(STYLE_APPLIER_SUFFIX);
            styleables.push(StyleableInfo {
                element: id,
                component_type,
                applier_class_name,
            });
        }
        Ok(StyleableRegistry { styleables })
    }

    pub fn styleables(&self) -> &[StyleableInfo] {
        &self.styleables
    }

    /// Identity match on the component type handle.
    pub fn find(&self, ty: TypeId) -> Option<&StyleableInfo> {
        self.styleables.iter().find(|s| s.component_type == ty)
    }

    /// Qualified names of all registered component types, for error
    /// reporting.
    pub fn known_types(&self, model: &ElementModel) -> Vec<String> {
        self.styleables
            .iter()
            .map(|s| model.qualified_name(s.component_type).to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.styleables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styleables.is_empty()
    }
}
