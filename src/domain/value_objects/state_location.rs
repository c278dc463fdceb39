//! Remote state location (an http or https URL)

use std::fmt;
use std::str::FromStr;

use super::reference::ParseReferenceError;

/// Address of the stack state file on the webserver
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateLocation(String);

impl StateLocation {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for StateLocation {
    type Err = ParseReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let lower = s.to_ascii_lowercase();
        let rest = lower
            .strip_prefix("https://")
            .or_else(|| lower.strip_prefix("http://"));
        match rest {
            Some(host_and_path) if !host_and_path.is_empty() => Ok(Self(s.to_string())),
            _ => Err(ParseReferenceError::NotHttp {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for StateLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
