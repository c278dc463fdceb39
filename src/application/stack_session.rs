//! Stack Session
//!
//! One named stack of an opened workspace, for the duration of a run.
//! The engine does the work; the session tags every failure with the phase
//! it happened in.

use tracing::debug;

use crate::domain::entities::{RunOutputs, Snapshot};
use crate::domain::ports::{DeploymentEngine, EngineResult, ProgressSink};
use crate::domain::value_objects::{ChangeSummary, ConfigEntry, UserAgent};
use crate::error::{Phase, VictorError, VictorResult};

/// Lifecycle of one stack within a run
pub struct StackSession<'e, E: DeploymentEngine> {
    engine: &'e E,
    stack: String,
    identity: UserAgent,
}

impl<'e, E: DeploymentEngine> StackSession<'e, E> {
    /// Create-or-load the stack. Never destructive.
    pub fn resolve(
        engine: &'e E,
        stack: impl Into<String>,
        identity: UserAgent,
    ) -> VictorResult<Self> {
        let stack = stack.into();
        engine
            .select_stack(&stack)
            .map_err(|e| VictorError::engine(Phase::StackResolve, e))?;
        debug!(stack = %stack, "stack selected");
        Ok(Self {
            engine,
            stack,
            identity,
        })
    }

    pub fn name(&self) -> &str {
        &self.stack
    }

    /// Replace the tracked state with a previously pushed snapshot
    pub fn import_snapshot(&self, snapshot: &Snapshot) -> VictorResult<()> {
        self.engine
            .import_snapshot(&self.stack, snapshot)
            .map_err(|e| VictorError::engine(Phase::Import, e))
    }

    /// Apply one configuration entry
    ///
    /// Returns the raw engine error: configuration failures are aggregated
    /// by the caller rather than aborting on the first one.
    pub fn set_config(&self, entry: &ConfigEntry) -> EngineResult<()> {
        self.engine.set_config(&self.stack, entry)
    }

    pub fn refresh(&self) -> VictorResult<ChangeSummary> {
        self.engine
            .refresh(&self.stack, &self.identity)
            .map_err(|e| VictorError::engine(Phase::Refresh, e))
    }

    pub fn destroy(&self) -> VictorResult<()> {
        self.engine
            .destroy(&self.stack, &self.identity)
            .map_err(|e| VictorError::engine(Phase::Destroy, e))
    }

    pub fn update(&self, progress: Option<&dyn ProgressSink>) -> VictorResult<RunOutputs> {
        self.engine
            .update(&self.stack, &self.identity, progress)
            .map_err(|e| VictorError::engine(Phase::Update, e))
    }

    pub fn export_snapshot(&self) -> VictorResult<Snapshot> {
        self.engine
            .export_snapshot(&self.stack)
            .map_err(|e| VictorError::engine(Phase::Export, e))
    }
}
