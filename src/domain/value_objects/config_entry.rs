//! Stack configuration entry (`<key> <value>`)

use std::fmt;
use std::str::FromStr;

use super::reference::{split_reference, ParseReferenceError};

/// A configuration value applied to the stack before refresh/update
///
/// The value may be empty and may contain spaces; only the first space
/// separates key from value.
#[derive(Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
}

impl ConfigEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl FromStr for ConfigEntry {
    type Err = ParseReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = split_reference(s, "key", "value")?;
        Ok(Self::new(key, value))
    }
}

// Values are frequently secrets; only the key is ever printed.
impl fmt::Debug for ConfigEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigEntry")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
