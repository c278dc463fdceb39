//! Run Report
//!
//! What a successful run did.

use crate::domain::entities::RunOutputs;
use crate::domain::value_objects::ChangeSummary;

/// Result of a successful run
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// A previous snapshot was imported (false: fresh stack)
    pub restored: bool,
    /// What the refresh detected
    pub drift: ChangeSummary,
    /// The stack was torn down before the update
    pub destroyed: bool,
    /// Outputs of the update
    pub outputs: RunOutputs,
    /// Outputs were written to their destination
    pub outputs_exported: bool,
    /// Digest of the pushed snapshot
    pub pushed_digest: String,
}

impl RunReport {
    pub fn has_drift(&self) -> bool {
        self.drift.has_drift()
    }
}
