//! Run Outputs Entity
//!
//! Outputs declared by the deployment program, as returned by a successful
//! update. Secret values are kept in clear with their secret flag; redaction
//! is the engine's business, not Victor's.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single stack output
///
/// Serialized as `{"Value": ..., "Secret": ...}` so files written by older
/// Victor releases stay readable by the same downstream steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputValue {
    pub value: serde_json::Value,
    pub secret: bool,
}

impl OutputValue {
    pub fn plain(value: impl Into<serde_json::Value>) -> Self {
        Self {
            value: value.into(),
            secret: false,
        }
    }

    pub fn secret(value: impl Into<serde_json::Value>) -> Self {
        Self {
            value: value.into(),
            secret: true,
        }
    }
}

/// Outputs of a run, keyed by output name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunOutputs(BTreeMap<String, OutputValue>);

impl RunOutputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: OutputValue) {
        self.0.insert(name.into(), value);
    }

    pub fn with(mut self, name: impl Into<String>, value: OutputValue) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&OutputValue> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &OutputValue)> {
        self.0.iter()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl FromIterator<(String, OutputValue)> for RunOutputs {
    fn from_iter<I: IntoIterator<Item = (String, OutputValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
