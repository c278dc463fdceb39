//! Engine command lines
//!
//! Pure builders; the runner decides how they are spawned.

use std::path::Path;

use crate::domain::value_objects::{ConfigEntry, PluginRef, UserAgent};

use super::command::Invocation;

/// Stack operations that change (or reconcile) infrastructure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Refresh,
    Destroy,
    Update,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Refresh => "refresh",
            Operation::Destroy => "destroy",
            Operation::Update => "up",
        }
    }
}

fn owned(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

pub fn version() -> Invocation {
    Invocation::new(owned(&["version"]))
}

pub fn plugin_install(plugin: &PluginRef, server: Option<&str>) -> Invocation {
    let mut args = owned(&["plugin", "install", "resource", &plugin.name, &plugin.version]);
    if let Some(server) = server {
        args.push("--server".to_string());
        args.push(server.to_string());
    }
    Invocation::new(args)
}

pub fn stack_select(stack: &str) -> Invocation {
    Invocation::new(owned(&["stack", "select", "--create", "--stack", stack]))
}

pub fn stack_import(stack: &str, file: &Path) -> Invocation {
    let mut args = owned(&["stack", "import", "--stack", stack, "--file"]);
    args.push(file.display().to_string());
    Invocation::new(args)
}

pub fn stack_export(stack: &str) -> Invocation {
    Invocation::new(owned(&["stack", "export", "--stack", stack]))
}

/// `config set`; the value is masked whenever the command is described
pub fn config_set(stack: &str, entry: &ConfigEntry) -> Invocation {
    Invocation::new(owned(&[
        "config",
        "set",
        "--stack",
        stack,
        "--",
        &entry.key,
        &entry.value,
    ]))
    .redacting_last()
}

pub fn operation(op: Operation, stack: &str, identity: &UserAgent) -> Invocation {
    Invocation::new(owned(&[
        op.as_str(),
        "--yes",
        "--skip-preview",
        "--non-interactive",
        "--stack",
        stack,
        "--exec-agent",
        identity.as_str(),
    ]))
}

/// Latest history entry, which holds the summary of the preceding operation
pub fn last_history_entry(stack: &str) -> Invocation {
    Invocation::new(owned(&[
        "stack",
        "history",
        "--stack",
        stack,
        "--json",
        "--page-size",
        "1",
    ]))
}

pub fn stack_outputs(stack: &str, show_secrets: bool) -> Invocation {
    let mut args = owned(&["stack", "output", "--stack", stack, "--json"]);
    if show_secrets {
        args.push("--show-secrets".to_string());
    }
    Invocation::new(args)
}
