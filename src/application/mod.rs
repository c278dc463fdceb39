//! Application Layer
//!
//! Use cases that sequence the domain ports into a deployment run.
//!
//! - `orchestrator` - The end-to-end pipeline (`Orchestrator`)
//! - `stack_session` - Phase-aware wrapper over one stack of the engine
//! - `outputs` - Stack outputs export to stdout or a file
//! - `batch` - "Attempt everything, then decide" error aggregation

mod batch;
pub mod orchestrator;
mod outputs;
mod stack_session;

pub use batch::{collect_all, Attempt, BatchError};
pub use orchestrator::{Orchestrator, RunOptions, RunReport};
pub use outputs::{ExportError, OutputsExporter};
pub use stack_session::StackSession;
