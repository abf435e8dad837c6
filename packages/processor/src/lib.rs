#![deny(clippy::all)]

//! Style applier code generation core.
//!
//! Inspects annotated declarations in a UI-component source tree and
//! computes the metadata needed to emit "style applier" classes that map
//! external style definitions onto component property setters. The two
//! engines are the style applier resolver (which applier is responsible
//! for a given component type, inherited responsibility included) and the
//! attribute extractor (how one attribute value reaches one setter).
//! Source emission, resource scanning, and host-compiler integration stay
//! outside this crate.

pub mod accessor;
pub mod applier_resolver;
pub mod attr_extractor;
pub mod code_block;
pub mod diagnostics;
pub mod elements;
mod error;
pub mod format;
pub mod names;
pub mod processor;
pub mod resources;
pub mod styleable;

pub use error::{ProcessorError, Result};
pub use processor::{Processor, ProcessorOutput, StyleApplierBindings};
