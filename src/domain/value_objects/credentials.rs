//! Webserver credentials

use std::fmt;

/// Optional basic-auth credentials for the state webserver
///
/// Authentication is only used when both halves are provided. An empty
/// string counts as provided.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    username: Option<String>,
    password: Option<String>,
}

impl Credentials {
    pub fn new(username: Option<String>, password: Option<String>) -> Self {
        Self { username, password }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::new(Some(username.into()), Some(password.into()))
    }

    /// Username and password, if both are set
    pub fn basic_auth(&self) -> Option<(&str, &str)> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Some((username, password)),
            _ => None,
        }
    }

    /// Name of the half that is missing when only one is set
    pub fn missing_half(&self) -> Option<&'static str> {
        match (&self.username, &self.password) {
            (Some(_), None) => Some("password"),
            (None, Some(_)) => Some("username"),
            _ => None,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}
