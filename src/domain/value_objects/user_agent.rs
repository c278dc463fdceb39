//! Caller identity sent to the webserver and the engine

use std::fmt;

/// `User-Agent` string identifying Victor and its version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAgent(String);

impl UserAgent {
    pub fn victor(version: &str) -> Self {
        Self(format!("CTFer.io Victor ({})", version))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
