//! Pulumi workspace and engine
//!
//! `PulumiWorkspaceProvider` binds to a program directory and checks the
//! engine binary answers; `PulumiCli` then runs each stack operation as one
//! `pulumi` command.

use std::io::Write;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::domain::entities::{RunOutputs, Snapshot};
use crate::domain::ports::{
    DeploymentEngine, EngineError, EngineResult, ProgressSink, WorkspaceProvider, WorkspaceSpec,
};
use crate::domain::value_objects::{ChangeSummary, ConfigEntry, PluginRef, UserAgent};
use crate::infrastructure::signal::CancelToken;

use super::args::{self, Operation};
use super::command::{CommandRunner, Invocation};
use super::{envelope, reports};

/// Default engine binary, looked up on `PATH`
pub const DEFAULT_BINARY: &str = "pulumi";

/// Opens Pulumi workspaces backed by the `pulumi` CLI
#[derive(Debug, Clone)]
pub struct PulumiWorkspaceProvider {
    binary: PathBuf,
    cancel: CancelToken,
}

impl PulumiWorkspaceProvider {
    pub fn new(binary: impl Into<PathBuf>, cancel: CancelToken) -> Self {
        Self {
            binary: binary.into(),
            cancel,
        }
    }
}

impl Default for PulumiWorkspaceProvider {
    fn default() -> Self {
        Self::new(DEFAULT_BINARY, CancelToken::new())
    }
}

impl WorkspaceProvider for PulumiWorkspaceProvider {
    type Engine = PulumiCli;

    fn open(&self, spec: &WorkspaceSpec) -> EngineResult<PulumiCli> {
        if !spec.program_dir.is_dir() {
            return Err(EngineError::WorkspaceNotFound {
                path: spec.program_dir.clone(),
            });
        }

        let runner = CommandRunner::new(
            &self.binary,
            &spec.program_dir,
            spec.passphrase.clone(),
            self.cancel.clone(),
        );
        let version = runner
            .run(&args::version(), None)
            .map_err(|error| match error {
                EngineError::Unavailable { .. } => error,
                other => EngineError::Unavailable {
                    binary: self.binary.display().to_string(),
                    message: other.to_string(),
                },
            })?;
        debug!(version = version.trim(), "pulumi is available");

        Ok(PulumiCli { runner })
    }
}

/// Stack operations of one opened workspace
pub struct PulumiCli {
    runner: CommandRunner,
}

impl PulumiCli {
    fn run(&self, invocation: &Invocation) -> EngineResult<String> {
        self.runner.run(invocation, None)
    }

    fn unexpected(&self, invocation: &Invocation, error: serde_json::Error) -> EngineError {
        EngineError::UnexpectedOutput {
            command: invocation.describe(&self.runner.binary().display().to_string()),
            message: error.to_string(),
        }
    }

    fn outputs(&self, stack: &str) -> EngineResult<RunOutputs> {
        let revealed_cmd = args::stack_outputs(stack, true);
        let masked_cmd = args::stack_outputs(stack, false);
        let revealed = self.run(&revealed_cmd)?;
        let masked = self.run(&masked_cmd)?;
        reports::outputs(&revealed, &masked).map_err(|e| self.unexpected(&revealed_cmd, e))
    }
}

impl DeploymentEngine for PulumiCli {
    fn install_plugin(&self, plugin: &PluginRef, server: Option<&str>) -> EngineResult<()> {
        info!(plugin = %plugin, server = server.unwrap_or("default"), "installing plugin");
        self.run(&args::plugin_install(plugin, server)).map(|_| ())
    }

    fn select_stack(&self, stack: &str) -> EngineResult<()> {
        self.run(&args::stack_select(stack)).map(|_| ())
    }

    fn import_snapshot(&self, stack: &str, snapshot: &Snapshot) -> EngineResult<()> {
        let wrapped = envelope::wrap(snapshot)?;
        let mut file = tempfile::Builder::new()
            .prefix("victor-state-")
            .suffix(".json")
            .tempfile()?;
        file.write_all(&wrapped)?;
        file.flush()?;

        self.run(&args::stack_import(stack, file.path())).map(|_| ())
    }

    fn export_snapshot(&self, stack: &str) -> EngineResult<Snapshot> {
        let exported = self.run(&args::stack_export(stack))?;
        envelope::unwrap(&exported)
    }

    fn set_config(&self, stack: &str, entry: &ConfigEntry) -> EngineResult<()> {
        self.run(&args::config_set(stack, entry)).map(|_| ())
    }

    fn refresh(&self, stack: &str, identity: &UserAgent) -> EngineResult<ChangeSummary> {
        self.run(&args::operation(Operation::Refresh, stack, identity))?;

        let history_cmd = args::last_history_entry(stack);
        let history = self.run(&history_cmd)?;
        let summary =
            reports::change_summary(&history).map_err(|e| self.unexpected(&history_cmd, e))?;
        debug!(changed = summary.changed(), "refresh summary");
        Ok(summary)
    }

    fn destroy(&self, stack: &str, identity: &UserAgent) -> EngineResult<()> {
        self.run(&args::operation(Operation::Destroy, stack, identity))
            .map(|_| ())
    }

    fn update(
        &self,
        stack: &str,
        identity: &UserAgent,
        progress: Option<&dyn ProgressSink>,
    ) -> EngineResult<RunOutputs> {
        self.runner
            .run(&args::operation(Operation::Update, stack, identity), progress)?;
        self.outputs(stack)
    }
}
