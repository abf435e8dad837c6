//! Class Names
//!
//! Qualified-name handling for generated classes.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ProcessorError, Result};

/// Java identifier, including the `$` used by synthetic members.
static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassName {
    package: String,
    simple_name: String,
}

impl ClassName {
    pub fn new(package: impl Into<String>, simple_name: impl Into<String>) -> Self {
        ClassName {
            package: package.into(),
            simple_name: simple_name.into(),
        }
    }

    /// Splits a dot-separated qualified name into package and simple name,
    /// validating every segment.
    pub fn parse(qualified: &str) -> Result<ClassName> {
        let (package, simple) = match qualified.rfind('.') {
            Some(i) => (&qualified[..i], &qualified[i + 1..]),
            None => ("", qualified),
        };
        let valid = IDENTIFIER.is_match(simple)
            && (package.is_empty() || package.split('.').all(|s| IDENTIFIER.is_match(s)));
        if !valid {
            return Err(ProcessorError::InvalidClassName {
                name: qualified.to_string(),
            });
        }
        Ok(ClassName::new(package, simple))
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    pub fn qualified(&self) -> String {
        if self.package.is_empty() {
            self.simple_name.clone()
        } else {
            format!("{}.{}", self.package, self.simple_name)
        }
    }

    /// Sibling class in the same package, named by appending `suffix`.
    /// `pkg.MyView` -> `pkg.MyViewStyleApplier`.
    pub fn peer(&self, suffix: &str) -> ClassName {
        ClassName::new(&self.package, format!("{}{}", self.simple_name, suffix))
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified())
    }
}
