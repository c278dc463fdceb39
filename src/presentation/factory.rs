//! Orchestrator Factory
//!
//! Resolves the run configuration and creates the orchestrator with its
//! infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use tracing::Span;

use crate::application::Orchestrator;
use crate::config::{load_with_warnings, ConfigLayer, ConfigWarning, RunConfig};
use crate::domain::ports::RemoteStateError;
use crate::domain::value_objects::UserAgent;
use crate::infrastructure::{
    CancelToken, PulumiWorkspaceProvider, RemoteStateClient, TracingProgressSink,
};

use super::cli::Cli;

/// Type alias for the orchestrator with the production adapters
pub type ConcreteOrchestrator = Orchestrator<PulumiWorkspaceProvider, RemoteStateClient>;

/// Secondary source of the stack passphrase
pub const PASSPHRASE_FALLBACK_ENV: &str = "PLUGIN_PASSPHRASE";

/// Identity sent to the webserver and to the engine
pub fn identity() -> UserAgent {
    UserAgent::victor(env!("CARGO_PKG_VERSION"))
}

/// Turn parsed flags into a configuration layer
///
/// `lookup` resolves environment variables not handled by clap.
pub fn cli_layer(cli: &Cli, lookup: impl Fn(&str) -> Option<String>) -> ConfigLayer {
    ConfigLayer {
        verbose: cli.verbose.then_some(true),
        statefile: cli.statefile.clone(),
        username: cli.username.clone(),
        password: cli.password.clone(),
        passphrase: cli
            .passphrase
            .clone()
            .or_else(|| lookup(PASSPHRASE_FALLBACK_ENV)),
        context: cli.context.clone(),
        server: cli.server.clone(),
        resources: cli.resources.clone(),
        configuration: cli.configuration.clone(),
        outputs: cli.outputs.clone(),
        stack: cli.stack.clone(),
        pulumi_bin: cli.pulumi_bin.clone(),
    }
}

/// Merge the config file (if any) under the flags and validate the result
pub fn resolve_config(cli: &Cli) -> anyhow::Result<(RunConfig, Vec<ConfigWarning>)> {
    let (file_layer, warnings) = match &cli.config {
        Some(path) => {
            let (file, warnings) = load_with_warnings(path)?;
            (file.into_layer(), warnings)
        }
        None => (ConfigLayer::default(), Vec::new()),
    };

    let layer = file_layer.merge(cli_layer(cli, |name| std::env::var(name).ok()));
    Ok((RunConfig::resolve(layer)?, warnings))
}

/// Create the orchestrator for `config`, logging under `span`
///
/// Engine progress is only streamed in verbose mode.
pub fn create_orchestrator(
    config: &RunConfig,
    cancel: CancelToken,
    span: Span,
) -> Result<ConcreteOrchestrator, RemoteStateError> {
    let workspace = PulumiWorkspaceProvider::new(&config.pulumi_bin, cancel);
    let store = RemoteStateClient::new(config.credentials.clone(), identity(), span.clone())?;

    let orchestrator = Orchestrator::new(workspace, store, identity(), span.clone());
    Ok(if config.verbose {
        orchestrator.with_progress_sink(Box::new(TracingProgressSink::new(span)))
    } else {
        orchestrator
    })
}
