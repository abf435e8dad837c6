//! Code Fragments
//!
//! Ready-to-splice source text for the two output-language consumers of the
//! generated appliers. Every accessor and attribute result carries one
//! fragment per language so no output branching leaks into the engines.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JavaCodeBlock(String);

impl JavaCodeBlock {
    pub fn new(code: impl Into<String>) -> Self {
        JavaCodeBlock(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JavaCodeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KotlinCodeBlock(String);

impl KotlinCodeBlock {
    pub fn new(code: impl Into<String>) -> Self {
        KotlinCodeBlock(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KotlinCodeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One fragment per output language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeFragments {
    pub java: JavaCodeBlock,
    pub kotlin: KotlinCodeBlock,
}
