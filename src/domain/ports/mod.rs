//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod deployment_engine;
pub mod progress_sink;
pub mod state_store;

pub use deployment_engine::{
    DeploymentEngine, EngineError, EngineResult, WorkspaceProvider, WorkspaceSpec,
};
pub use progress_sink::ProgressSink;
pub use state_store::{FetchOutcome, RemoteStateError, StateStore};
