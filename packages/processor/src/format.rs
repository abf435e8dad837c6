//! Format Classifier
//!
//! Maps a setter's accepted value type to the semantic format of the
//! attribute value, which in turn picks the typed-array extraction routine
//! the generated code calls at runtime.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::elements::{Annotation, Element, ElementKind, ElementModel, TypeId};

/// Qualified name of the runtime style type; setters taking a whole style
/// get the [`Format::Style`] extraction path.
pub const STYLE_CLASS: &str = "com.styleable.runtime.Style";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Format {
    Boolean,
    CharSequence,
    Color,
    ColorStateList,
    Dimension,
    Drawable,
    Float,
    Fraction,
    Int,
    NonResourceString,
    ResourceId,
    String,
    Style,
}

static FORMAT_BY_TYPE: Lazy<HashMap<&'static str, Format>> = Lazy::new(|| {
    HashMap::from([
        ("boolean", Format::Boolean),
        ("java.lang.Boolean", Format::Boolean),
        ("java.lang.CharSequence", Format::CharSequence),
        ("android.content.res.ColorStateList", Format::ColorStateList),
        ("android.graphics.drawable.Drawable", Format::Drawable),
        ("float", Format::Float),
        ("java.lang.Float", Format::Float),
        ("int", Format::Int),
        ("java.lang.Integer", Format::Int),
        ("java.lang.String", Format::String),
        (STYLE_CLASS, Format::Style),
    ])
});

/// Parameter annotations that refine the classification before the type
/// table is consulted, in precedence order.
static FORMAT_BY_ANNOTATION: &[(Annotation, Format)] = &[
    (Annotation::Px, Format::Dimension),
    (Annotation::ColorInt, Format::Color),
    (Annotation::Fraction, Format::Fraction),
    (Annotation::AnyRes, Format::ResourceId),
    (Annotation::NonResourceString, Format::NonResourceString),
];

impl Format {
    /// Classifies the value type accepted by an annotated setter. Parameter
    /// annotations refine the raw type (a plain int may be a dimension, a
    /// color, a fraction, or a resource reference); otherwise the parameter
    /// type decides. Returns `None` for types the generator has no
    /// extraction routine for.
    pub fn for_method(model: &ElementModel, element: &Element) -> Option<Format> {
        for (annotation, format) in FORMAT_BY_ANNOTATION {
            if element.has_annotation(annotation) {
                return Some(*format);
            }
        }
        let param = match &element.kind {
            ElementKind::Method { params } if params.len() == 1 => params[0],
            _ => return None,
        };
        Format::for_type(model, param)
    }

    pub fn for_type(model: &ElementModel, ty: TypeId) -> Option<Format> {
        FORMAT_BY_TYPE.get(model.qualified_name(ty)).copied()
    }

    /// Name of the `TypedArray` method the generated applier calls to pull
    /// a value of this format out of the style source.
    pub fn typed_array_method(self) -> &'static str {
        match self {
            Format::Boolean => "getBoolean",
            Format::CharSequence => "getText",
            Format::Color => "getColor",
            Format::ColorStateList => "getColorStateList",
            Format::Dimension => "getDimensionPixelSize",
            Format::Drawable => "getDrawable",
            Format::Float => "getFloat",
            Format::Fraction => "getFraction",
            Format::Int => "getInt",
            Format::NonResourceString => "getNonResourceString",
            Format::ResourceId => "getResourceId",
            Format::String => "getString",
            Format::Style => "getStyle",
        }
    }
}
