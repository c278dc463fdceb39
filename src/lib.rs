//! Victor - continuous deployment for Pulumi in CI pipelines
//!
//! Victor runs a Pulumi program from a CI step and keeps the stack state on
//! a plain HTTP webserver instead of a hosted state backend. Each run fetches
//! the previous snapshot (or starts fresh), refreshes, tears down drifted
//! stacks, updates, exports the outputs, and pushes the new snapshot back.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{Orchestrator, OutputsExporter, RunOptions, RunReport, StackSession};
pub use domain::entities::{OutputValue, RunOutputs, Snapshot};
pub use domain::value_objects::{
    ChangeSummary, ConfigEntry, Credentials, OutputsDestination, PluginRef, StateLocation,
    UserAgent,
};
pub use error::{Phase, VictorError, VictorResult};
