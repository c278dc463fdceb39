//! Orchestrator Use Case
//!
//! Runs the deployment pipeline:
//! 1. Open the workspace (program directory + passphrase)
//! 2. Install resource plugins (all attempted, then fail fast)
//! 3. Resolve the stack and restore the remote snapshot, if any
//! 4. Apply configuration (all attempted, checked before refresh)
//! 5. Refresh
//! 6. Destroy when the refresh detected drift
//! 7. Update
//! 8. Export outputs (best effort)
//! 9. Export and push the new snapshot
//!
//! Steps run strictly in order; the first fatal error ends the run.

use tracing::{error, info, warn, Span};

use crate::application::batch::collect_all;
use crate::application::outputs::OutputsExporter;
use crate::application::stack_session::StackSession;
use crate::domain::ports::{
    DeploymentEngine, FetchOutcome, ProgressSink, StateStore, WorkspaceProvider, WorkspaceSpec,
};
use crate::domain::value_objects::UserAgent;
use crate::error::{VictorError, VictorResult};

use super::options::RunOptions;
use super::result::RunReport;

/// Deployment orchestrator
///
/// Parameterized by its ports so tests can substitute recording fakes for
/// the Pulumi CLI and the webserver.
pub struct Orchestrator<W, S>
where
    W: WorkspaceProvider,
    S: StateStore,
{
    workspace: W,
    store: S,
    identity: UserAgent,
    span: Span,
    progress: Option<Box<dyn ProgressSink>>,
}

impl<W, S> Orchestrator<W, S>
where
    W: WorkspaceProvider,
    S: StateStore,
{
    pub fn new(workspace: W, store: S, identity: UserAgent, span: Span) -> Self {
        Self {
            workspace,
            store,
            identity,
            span,
            progress: None,
        }
    }

    /// Stream update progress to `sink`
    pub fn with_progress_sink(mut self, sink: Box<dyn ProgressSink>) -> Self {
        self.progress = Some(sink);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Execute one run
    pub fn run(&self, options: &RunOptions) -> VictorResult<RunReport> {
        let _entered = self.span.enter();
        info!(
            program_dir = %options.program_dir.display(),
            stack = %options.stack,
            location = %options.location,
            "starting run"
        );

        let spec = WorkspaceSpec::new(&options.program_dir, options.passphrase.clone());
        let engine = self
            .workspace
            .open(&spec)
            .map_err(|source| VictorError::Workspace {
                path: options.program_dir.clone(),
                source,
            })?;

        self.install_plugins(&engine, options)?;

        let session = StackSession::resolve(&engine, options.stack.clone(), self.identity.clone())?;
        let restored = self.restore(&session, options)?;

        self.configure(&session, options)?;

        info!("refreshing stack");
        let drift = session.refresh()?;
        let destroyed = if drift.has_drift() {
            warn!(
                changed = drift.changed(),
                "refresh detected drift, destroying the stack before updating"
            );
            session.destroy()?;
            true
        } else {
            info!("no drift detected");
            false
        };

        info!("updating stack");
        let outputs = session.update(self.progress.as_deref())?;
        info!(outputs = outputs.len(), "update succeeded");

        let exporter = OutputsExporter::new(options.outputs.clone());
        let outputs_exported = match exporter.export(&outputs) {
            Ok(exported) => exported,
            Err(err) => {
                warn!(error = %err, "exporting outputs failed, continuing");
                false
            }
        };

        let snapshot = session.export_snapshot()?;
        self.store
            .push(&options.location, &snapshot)
            .map_err(|err| {
                error!(
                    error = %err,
                    location = %options.location,
                    "infrastructure was updated but the remote state was not; it is now stale"
                );
                VictorError::RemotePush(err)
            })?;
        info!(digest = %snapshot.digest(), "run complete");

        Ok(RunReport {
            restored,
            drift,
            destroyed,
            outputs,
            outputs_exported,
            pushed_digest: snapshot.digest(),
        })
    }

    fn install_plugins<E: DeploymentEngine>(
        &self,
        engine: &E,
        options: &RunOptions,
    ) -> VictorResult<()> {
        if options.plugins.is_empty() {
            return Ok(());
        }
        info!(count = options.plugins.len(), "installing resource plugins");
        collect_all(
            "plugin install",
            &options.plugins,
            |plugin| plugin.to_string(),
            |plugin| engine.install_plugin(plugin, options.plugin_server.as_deref()),
        )
        .map_err(VictorError::PluginInstall)
    }

    /// Import the remote snapshot; returns whether one existed
    fn restore<E: DeploymentEngine>(
        &self,
        session: &StackSession<'_, E>,
        options: &RunOptions,
    ) -> VictorResult<bool> {
        match self
            .store
            .fetch(&options.location)
            .map_err(VictorError::RemoteFetch)?
        {
            FetchOutcome::Found(snapshot) => {
                info!(
                    stack = session.name(),
                    digest = %snapshot.digest(),
                    bytes = snapshot.len(),
                    "importing remote state"
                );
                session.import_snapshot(&snapshot)?;
                Ok(true)
            }
            FetchOutcome::NotFound => {
                info!(stack = session.name(), "no remote state yet, starting a fresh stack");
                Ok(false)
            }
        }
    }

    fn configure<E: DeploymentEngine>(
        &self,
        session: &StackSession<'_, E>,
        options: &RunOptions,
    ) -> VictorResult<()> {
        // keys only: values may be secrets
        collect_all(
            "configuration",
            &options.configuration,
            |entry| entry.key.clone(),
            |entry| session.set_config(entry),
        )
        .map_err(VictorError::Configuration)
    }
}
