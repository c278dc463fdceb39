//! Wiring for in-process runs: fake engine, real HTTP client

use std::path::Path;

use tracing::Span;
use victor::infrastructure::RemoteStateClient;
use victor::{Credentials, Orchestrator, RunOptions, StateLocation, UserAgent};

use super::fake_engine::{FakeWorkspace, SharedWorld};
use super::fake_server::StateServer;

pub type TestOrchestrator = Orchestrator<FakeWorkspace, RemoteStateClient>;

pub fn identity() -> UserAgent {
    UserAgent::victor("0.0.0-test")
}

pub fn orchestrator(world: &SharedWorld, credentials: Credentials) -> TestOrchestrator {
    let client = RemoteStateClient::new(credentials, identity(), Span::none())
        .expect("build http client");
    Orchestrator::new(FakeWorkspace::new(world.clone()), client, identity(), Span::none())
}

/// Options for a run against `server`'s `/state/victor.json`
pub fn options(program_dir: &Path, server: &StateServer) -> RunOptions {
    let location: StateLocation = server.url("state/victor.json").parse().expect("state url");
    RunOptions::new(program_dir, location).with_passphrase("correct horse")
}
