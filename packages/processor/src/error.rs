//! Fatal processor errors.
//!
//! These abort the whole run: they indicate either an internal consistency
//! bug or a configuration gap the generator cannot route around. Recoverable
//! user-input problems go through [`crate::diagnostics::Diagnostics`]
//! instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessorError {
    /// No type in the queried ancestor chain has a registered style applier.
    #[error(
        "could not find style applier for {type_name}. Available types are {known_styleables:?}"
    )]
    NoStyleableAncestor {
        type_name: String,
        known_styleables: Vec<String>,
    },

    /// The declaration is of a kind the processor does not understand.
    #[error("unsupported declaration shape for `{element}`")]
    UnsupportedDeclaration { element: String },

    /// A Kotlin property must be accompanied by exactly one Companion holder.
    #[error("`{element}` - expected exactly one Companion holder, found {found}")]
    CompanionHolderMismatch { element: String, found: usize },

    /// No getter on the Companion holder matched the property name.
    #[error("`{element}` - could not get companion property `{getter_name}`")]
    CompanionGetterNotFound {
        element: String,
        getter_name: String,
    },

    /// `@Attr` payload missing on an element that was pre-filtered by
    /// annotation presence.
    #[error("@Attr annotation not found on `{element}`")]
    MissingAttrAnnotation { element: String },

    #[error("invalid class name `{name}`")]
    InvalidClassName { name: String },
}

pub type Result<T> = std::result::Result<T, ProcessorError>;
