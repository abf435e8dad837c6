//! Accessor Resolution
//!
//! Finds the real invocable accessor behind an annotated property
//! declaration. Java fields are read directly. Kotlin properties compile to
//! a private backing field whose getter lives on a sibling `Companion`
//! holder; if the property is internal the getter name also carries a `$`
//! suffix for obfuscation, so matching is two-phase: exact name first, then
//! prefix against the suffixed form. Kotlin 1.4.x emits both at once and
//! only the unsuffixed one is callable, hence the ordering.

use crate::code_block::{CodeFragments, JavaCodeBlock, KotlinCodeBlock};
use crate::elements::{ElementId, ElementKind, ElementModel, SourceLanguage};
use crate::error::{ProcessorError, Result};

/// Name of the implicit sibling holder carrying Kotlin property accessors.
const COMPANION_HOLDER: &str = "Companion";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessor {
    /// The member generated code invokes to read the property.
    pub element: ElementId,
    pub fragments: CodeFragments,
}

/// Resolves the accessor for an annotated field-like declaration. Any shape
/// the resolver does not understand is a fatal error: it means either an
/// unsupported input declaration or an internal consistency bug.
pub fn resolve_accessor(model: &ElementModel, field: ElementId) -> Result<Accessor> {
    let element = model.element(field);
    if !matches!(element.kind, ElementKind::Field) {
        return Err(ProcessorError::UnsupportedDeclaration {
            element: element.name.clone(),
        });
    }

    if element.language == SourceLanguage::Java {
        // The field itself is the accessor; the Kotlin consumer still uses
        // call syntax for both cases.
        return Ok(Accessor {
            element: field,
            fragments: CodeFragments {
                java: JavaCodeBlock::new(element.name.clone()),
                kotlin: KotlinCodeBlock::new(format!("{}()", element.name)),
            },
        });
    }

    let getter_name = format!("get{}", capitalize(&element.name));

    let holders: Vec<ElementId> = model
        .siblings(field)
        .into_iter()
        .filter(|&id| {
            let sibling = model.element(id);
            matches!(sibling.kind, ElementKind::Type { .. }) && sibling.name == COMPANION_HOLDER
        })
        .collect();
    if holders.len() != 1 {
        return Err(ProcessorError::CompanionHolderMismatch {
            element: element.name.clone(),
            found: holders.len(),
        });
    }
    let ElementKind::Type { id: holder } = model.element(holders[0]).kind else {
        return Err(ProcessorError::UnsupportedDeclaration {
            element: element.name.clone(),
        });
    };

    let methods: Vec<ElementId> = model
        .members(holder)
        .iter()
        .copied()
        .filter(|&m| matches!(model.element(m).kind, ElementKind::Method { .. }))
        .collect();

    let mangled_prefix = format!("{getter_name}$");
    let getter = methods
        .iter()
        .copied()
        .find(|&m| model.element(m).name == getter_name)
        .or_else(|| {
            methods
                .iter()
                .copied()
                .find(|&m| model.element(m).name.starts_with(&mangled_prefix))
        })
        .ok_or_else(|| ProcessorError::CompanionGetterNotFound {
            element: element.name.clone(),
            getter_name: getter_name.clone(),
        })?;

    let getter_simple = &model.element(getter).name;
    Ok(Accessor {
        element: getter,
        fragments: CodeFragments {
            java: JavaCodeBlock::new(format!("{COMPANION_HOLDER}.{getter_simple}()")),
            kotlin: KotlinCodeBlock::new(format!("{getter_simple}()")),
        },
    })
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
