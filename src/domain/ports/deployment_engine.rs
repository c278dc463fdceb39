//! Deployment Engine Port
//!
//! The infrastructure-as-code engine, consumed as a black box. Victor only
//! sequences these operations; planning and resource execution belong to
//! the engine.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::entities::{RunOutputs, Snapshot};
use crate::domain::ports::ProgressSink;
use crate::domain::value_objects::{ChangeSummary, ConfigEntry, PluginRef, UserAgent};

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Deployment engine errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// The program directory does not exist
    #[error("program directory {} does not exist", .path.display())]
    WorkspaceNotFound { path: PathBuf },

    /// The engine cannot be started at all
    #[error("engine '{binary}' is not available: {message}")]
    Unavailable { binary: String, message: String },

    /// An engine command exited unsuccessfully
    #[error("`{command}` failed{}: {stderr}", exit_suffix(.status))]
    CommandFailed {
        command: String,
        status: Option<i32>,
        stderr: String,
    },

    /// The run was interrupted while the command was in flight
    #[error("`{command}` was cancelled")]
    Cancelled { command: String },

    /// State does not match the schema the engine understands
    #[error("{message}")]
    StateFormat { message: String },

    /// The engine printed something Victor could not understand
    #[error("unexpected output from `{command}`: {message}")]
    UnexpectedOutput { command: String, message: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn exit_suffix(status: &Option<i32>) -> String {
    status
        .map(|code| format!(" with exit code {}", code))
        .unwrap_or_default()
}

/// What a workspace is bound to
#[derive(Clone, PartialEq, Eq)]
pub struct WorkspaceSpec {
    /// Directory holding the deployment program
    pub program_dir: PathBuf,
    /// Passphrase protecting the stack secrets
    pub passphrase: String,
}

impl WorkspaceSpec {
    pub fn new(program_dir: impl Into<PathBuf>, passphrase: impl Into<String>) -> Self {
        Self {
            program_dir: program_dir.into(),
            passphrase: passphrase.into(),
        }
    }
}

impl std::fmt::Debug for WorkspaceSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkspaceSpec")
            .field("program_dir", &self.program_dir)
            .finish_non_exhaustive()
    }
}

/// Opens engine workspaces
pub trait WorkspaceProvider {
    type Engine: DeploymentEngine;

    /// Bind to the program directory with the passphrase injected
    fn open(&self, spec: &WorkspaceSpec) -> EngineResult<Self::Engine>;
}

/// Per-stack operations of an opened workspace
///
/// Every stack-scoped operation names the stack explicitly; the engine
/// keeps no notion of a "current" stack on Victor's side.
pub trait DeploymentEngine {
    /// Install a resource plugin, from `server` when given
    fn install_plugin(&self, plugin: &PluginRef, server: Option<&str>) -> EngineResult<()>;

    /// Select the stack, creating it empty if it is not registered yet
    fn select_stack(&self, stack: &str) -> EngineResult<()>;

    /// Replace the stack's tracked state with `snapshot`
    fn import_snapshot(&self, stack: &str, snapshot: &Snapshot) -> EngineResult<()>;

    /// Serialize the stack's tracked state
    fn export_snapshot(&self, stack: &str) -> EngineResult<Snapshot>;

    /// Set one configuration value on the stack
    fn set_config(&self, stack: &str, entry: &ConfigEntry) -> EngineResult<()>;

    /// Reconcile tracked state against live infrastructure
    fn refresh(&self, stack: &str, identity: &UserAgent) -> EngineResult<ChangeSummary>;

    /// Tear down every tracked resource
    fn destroy(&self, stack: &str, identity: &UserAgent) -> EngineResult<()>;

    /// Converge live infrastructure to the program's desired state
    fn update(
        &self,
        stack: &str,
        identity: &UserAgent,
        progress: Option<&dyn ProgressSink>,
    ) -> EngineResult<RunOutputs>;
}
