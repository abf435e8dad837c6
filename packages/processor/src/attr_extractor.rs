//! Attribute Extraction
//!
//! Turns an `@Attr`-annotated setter into a normalized [`AttrInfo`]
//! descriptor. Malformed user input (wrong visibility, wrong arity,
//! unresolvable R references, unsupported value types) is recoverable: the
//! extractor logs one diagnostic, yields `None`, and the run continues so
//! all independent errors surface. A missing `@Attr` payload is fatal since
//! the host already filtered candidates by annotation presence.

use serde::Serialize;

use crate::code_block::{JavaCodeBlock, KotlinCodeBlock};
use crate::diagnostics::Diagnostics;
use crate::elements::{ElementId, ElementKind, ElementModel, TypeId, NO_DEFAULT_VALUE};
use crate::error::{ProcessorError, Result};
use crate::format::Format;
use crate::resources::{ResourceId, ResourceResolver};

pub const ATTR_ANNOTATION: &str = "Attr";

/// One bindable attribute: everything the emitter needs to wire an external
/// style value into a single setter call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttrInfo {
    /// The annotated setter.
    pub element: ElementId,
    /// The setter's single parameter type.
    pub target_type: TypeId,
    pub target_format: Format,
    pub styleable_res_id: ResourceId,
    pub default_value_res_id: Option<ResourceId>,
    pub javadoc: JavaCodeBlock,
    pub kdoc: KotlinCodeBlock,
    /// Minimum platform API level; 1 unless `@RequiresApi` raises it.
    pub requires_api: i32,
}

pub struct AttrExtractor<'a> {
    model: &'a ElementModel,
    resources: &'a dyn ResourceResolver,
}

impl<'a> AttrExtractor<'a> {
    pub fn new(model: &'a ElementModel, resources: &'a dyn ResourceResolver) -> Self {
        AttrExtractor { model, resources }
    }

    pub fn extract(
        &self,
        element: ElementId,
        diagnostics: &mut Diagnostics,
    ) -> Result<Option<AttrInfo>> {
        let el = self.model.element(element);

        if el.visibility.is_private_or_protected() {
            diagnostics.log_error(
                element,
                "Methods annotated with @Attr can't be private or protected.",
            );
            return Ok(None);
        }

        let target_type = match &el.kind {
            ElementKind::Method { params } if params.len() == 1 => params[0],
            ElementKind::Method { .. } => {
                diagnostics.log_error(
                    element,
                    "Methods annotated with @Attr must provide a single parameter.",
                );
                return Ok(None);
            }
            _ => {
                return Err(ProcessorError::UnsupportedDeclaration {
                    element: el.name.clone(),
                })
            }
        };

        let (value, default_value) =
            el.attr_annotation()
                .ok_or_else(|| ProcessorError::MissingAttrAnnotation {
                    element: el.name.clone(),
                })?;

        let Some(target_format) = Format::for_method(self.model, el) else {
            diagnostics.log_error(
                element,
                format!(
                    "Unsupported attribute value type {}.",
                    self.model.qualified_name(target_type)
                ),
            );
            return Ok(None);
        };

        let styleable_res_id = match self.resources.resolve(ATTR_ANNOTATION, element, value) {
            Ok(Some(id)) => id,
            // The resolver reports its own failures in this case.
            Ok(None) => return Ok(None),
            Err(_) => {
                diagnostics.log_error(
                    element,
                    "Incorrectly typed @Attr value parameter. (This usually happens when an R \
                     value doesn't exist.)",
                );
                return Ok(None);
            }
        };

        let default_value_res_id = if default_value != NO_DEFAULT_VALUE {
            match self
                .resources
                .resolve(ATTR_ANNOTATION, element, default_value)
            {
                Ok(Some(id)) => Some(id),
                Ok(None) => return Ok(None),
                Err(_) => {
                    diagnostics.log_error(
                        element,
                        "Incorrectly typed @Attr defaultValue parameter. (This usually happens \
                         when an R value doesn't exist.)",
                    );
                    return Ok(None);
                }
            }
        } else {
            None
        };

        // value is a legacy alias of api, so api wins when it was raised.
        let requires_api = el
            .requires_api_annotation()
            .map(|(api, value)| if api > 1 { api } else { value })
            .unwrap_or(1);

        let owner = match el.enclosing {
            Some(ty) => self.model.qualified_name(ty),
            None => {
                return Err(ProcessorError::UnsupportedDeclaration {
                    element: el.name.clone(),
                })
            }
        };
        let javadoc = JavaCodeBlock::new(format!(
            "@see {}#{}({})\n",
            owner,
            el.name,
            self.model.qualified_name(target_type)
        ));
        // Internal functions carry a '$' suffix that breaks kdoc syntax; the
        // part after it is for obfuscation anyway, so drop it.
        let kdoc_name = match el.name.find('$') {
            Some(i) => &el.name[..i],
            None => el.name.as_str(),
        };
        let kdoc = KotlinCodeBlock::new(format!("@see {owner}.{kdoc_name}\n"));

        Ok(Some(AttrInfo {
            element,
            target_type,
            target_format,
            styleable_res_id,
            default_value_res_id,
            javadoc,
            kdoc,
            requires_api,
        }))
    }
}
