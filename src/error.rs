//! Error types for Victor
//!
//! Library errors use `thiserror`; the binary wraps them with `anyhow`.
//! Every fatal error carries the pipeline phase it was raised in.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::application::BatchError;
use crate::domain::ports::{EngineError, RemoteStateError};

/// Result type alias for Victor operations
pub type VictorResult<T> = Result<T, VictorError>;

/// Pipeline phase an error was raised in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Workspace,
    PluginInstall,
    StackResolve,
    Fetch,
    Import,
    Configure,
    Refresh,
    Destroy,
    Update,
    Export,
    Push,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Workspace => "workspace",
            Phase::PluginInstall => "plugin install",
            Phase::StackResolve => "stack resolve",
            Phase::Fetch => "state fetch",
            Phase::Import => "state import",
            Phase::Configure => "configuration",
            Phase::Refresh => "refresh",
            Phase::Destroy => "destroy",
            Phase::Update => "update",
            Phase::Export => "state export",
            Phase::Push => "state push",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type for a deployment run
#[derive(Error, Debug)]
pub enum VictorError {
    /// The local workspace could not be created
    #[error("creating the local workspace at {path}: {source}")]
    Workspace {
        path: PathBuf,
        #[source]
        source: EngineError,
    },

    /// One or more plugin installs failed
    #[error("pulumi resources install, failing fast: {0}")]
    PluginInstall(#[source] BatchError),

    /// The remote state could not be fetched
    #[error("fetching stack state: {0}")]
    RemoteFetch(#[source] RemoteStateError),

    /// The snapshot does not match the schema the engine expects
    #[error("{phase}: invalid stack state: {message}")]
    StateFormat { phase: Phase, message: String },

    /// One or more configuration entries could not be applied
    #[error("setting stack configuration: {0}")]
    Configuration(#[source] BatchError),

    /// A deployment engine operation failed
    #[error("{phase}: {source}")]
    Engine {
        phase: Phase,
        #[source]
        source: EngineError,
    },

    /// The new snapshot could not be pushed after the update was applied
    #[error(
        "pushing stack state failed after the infrastructure was updated; \
         the remote state is now stale and the next run will import outdated state: {0}"
    )]
    RemotePush(#[source] RemoteStateError),
}

impl VictorError {
    /// Wrap an engine error, keeping schema problems distinguishable
    pub fn engine(phase: Phase, source: EngineError) -> Self {
        match source {
            EngineError::StateFormat { message } => VictorError::StateFormat { phase, message },
            source => VictorError::Engine { phase, source },
        }
    }

    /// Phase of the pipeline that failed
    pub fn phase(&self) -> Phase {
        match self {
            VictorError::Workspace { .. } => Phase::Workspace,
            VictorError::PluginInstall(_) => Phase::PluginInstall,
            VictorError::RemoteFetch(_) => Phase::Fetch,
            VictorError::StateFormat { phase, .. } => *phase,
            VictorError::Configuration(_) => Phase::Configure,
            VictorError::Engine { phase, .. } => *phase,
            VictorError::RemotePush(_) => Phase::Push,
        }
    }

    /// Whether live infrastructure may have changed before the failure
    pub fn infrastructure_touched(&self) -> bool {
        matches!(
            self.phase(),
            Phase::Destroy | Phase::Update | Phase::Export | Phase::Push
        )
    }
}
