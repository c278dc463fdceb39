//! Change Summary Value Object
//!
//! Resource operation counts reported by a refresh, e.g.
//! `{"same": 4, "delete": 1}`.

use std::collections::BTreeMap;

/// Operation name the engine uses for untouched resources
const SAME: &str = "same";

/// Per-operation resource counts of an engine operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSummary {
    changes: BTreeMap<String, u64>,
}

impl ChangeSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, op: impl Into<String>, count: u64) -> Self {
        self.changes.insert(op.into(), count);
        self
    }

    pub fn count(&self, op: &str) -> u64 {
        self.changes.get(op).copied().unwrap_or(0)
    }

    /// Number of resources whose tracked state differed from live state
    pub fn changed(&self) -> u64 {
        self.changes
            .iter()
            .filter(|(op, _)| op.as_str() != SAME)
            .map(|(_, count)| *count)
            .sum()
    }

    /// Whether tracked state drifted away from live infrastructure
    pub fn has_drift(&self) -> bool {
        self.changed() > 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &u64)> {
        self.changes.iter()
    }
}

impl From<BTreeMap<String, u64>> for ChangeSummary {
    fn from(changes: BTreeMap<String, u64>) -> Self {
        Self { changes }
    }
}

impl FromIterator<(String, u64)> for ChangeSummary {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self {
            changes: iter.into_iter().collect(),
        }
    }
}
