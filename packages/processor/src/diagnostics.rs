//! Diagnostics Sink
//!
//! Collects recoverable user-input errors. Logging never unwinds; the run
//! keeps going so that all independent errors surface before the build is
//! failed at a later checkpoint.

use serde::Serialize;

use crate::elements::ElementId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub element: ElementId,
    pub message: String,
}

#[derive(Debug, Default, Serialize)]
pub struct Diagnostics {
    errors: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics::default()
    }

    pub fn log_error(&mut self, element: ElementId, message: impl Into<String>) {
        self.errors.push(Diagnostic {
            element,
            message: message.into(),
        });
    }

    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}
