//! Victor CLI
//!
//! Thin entry point: parse flags, install the log dispatcher, run.

use anyhow::Context;
use clap::Parser;
use tracing::{error, info, info_span, warn};

use victor::config::{ConfigWarning, RunConfig};
use victor::infrastructure::{install_handler, CancelToken};
use victor::presentation::{factory, logging, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (config, warnings) = factory::resolve_config(&cli)?;

    let dispatch = logging::dispatch(config.verbose, cli.log_format);
    tracing::dispatcher::with_default(&dispatch, || run(config, warnings))
}

fn run(config: RunConfig, warnings: Vec<ConfigWarning>) -> anyhow::Result<()> {
    for warning in &warnings {
        warn!(%warning, "ignoring config file key");
    }

    let cancel = CancelToken::new();
    install_handler(cancel.clone()).context("installing the interrupt handler")?;

    let span = info_span!("victor", stack = %config.stack);
    let orchestrator = factory::create_orchestrator(&config, cancel, span)?;
    let report = orchestrator.run(&config.run_options()).inspect_err(|err| {
        if err.infrastructure_touched() {
            error!(
                phase = %err.phase(),
                "live infrastructure may have changed, inspect the stack before re-running"
            );
        }
    })?;

    info!(
        restored = report.restored,
        destroyed = report.destroyed,
        outputs = report.outputs.len(),
        digest = %report.pushed_digest,
        "deployment succeeded"
    );
    Ok(())
}
