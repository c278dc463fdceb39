//! Resource plugin reference (`<name> <version>`)

use std::fmt;
use std::str::FromStr;

use super::reference::{split_reference, ParseReferenceError};

/// A resource plugin to install before touching the stack
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PluginRef {
    pub name: String,
    pub version: String,
}

impl PluginRef {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl FromStr for PluginRef {
    type Err = ParseReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, version) = split_reference(s.trim(), "name", "version")?;
        let version = version.trim();
        if version.is_empty() {
            return Err(ParseReferenceError::Empty {
                field: "version",
                input: s.to_string(),
            });
        }
        Ok(Self::new(name, version))
    }
}

impl fmt::Display for PluginRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.version)
    }
}
