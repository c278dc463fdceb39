//! In-memory deployment engine
//!
//! Models just enough of an IaC engine to exercise the pipeline end to end:
//! `live` is what actually runs, `tracked` is what the stack believes runs,
//! and the program declares `desired`. Snapshots are
//! `{"resources":[...]}` documents so tests can reason about their content.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use victor::domain::ports::{
    DeploymentEngine, EngineError, EngineResult, ProgressSink, WorkspaceProvider, WorkspaceSpec,
};
use victor::{ChangeSummary, ConfigEntry, OutputValue, PluginRef, RunOutputs, Snapshot, UserAgent};

/// Shared state of the simulated infrastructure
#[derive(Debug, Default)]
pub struct World {
    pub live: BTreeSet<String>,
    pub tracked: BTreeSet<String>,
    pub desired: BTreeSet<String>,
    pub config: BTreeMap<String, String>,
    pub broken_plugins: BTreeSet<String>,
    pub installed: Vec<(String, Option<String>)>,
    pub destroyed_runs: usize,
    pub identities: Vec<String>,
}

pub type SharedWorld = Rc<RefCell<World>>;

/// New world whose program declares `desired`
pub fn world(desired: &[&str]) -> SharedWorld {
    let world = World {
        desired: desired.iter().map(|s| s.to_string()).collect(),
        ..World::default()
    };
    Rc::new(RefCell::new(world))
}

/// Snapshot tracking exactly `resources`
pub fn snapshot_of(resources: &[&str]) -> Vec<u8> {
    let sorted: BTreeSet<&str> = resources.iter().copied().collect();
    serde_json::to_vec(&serde_json::json!({ "resources": sorted })).expect("serialize snapshot")
}

/// Workspace provider handing out engines over one shared world
pub struct FakeWorkspace {
    world: SharedWorld,
}

impl FakeWorkspace {
    pub fn new(world: SharedWorld) -> Self {
        Self { world }
    }
}

impl WorkspaceProvider for FakeWorkspace {
    type Engine = FakeEngine;

    fn open(&self, spec: &WorkspaceSpec) -> EngineResult<FakeEngine> {
        if !spec.program_dir.is_dir() {
            return Err(EngineError::WorkspaceNotFound {
                path: spec.program_dir.clone(),
            });
        }
        Ok(FakeEngine {
            world: self.world.clone(),
        })
    }
}

pub struct FakeEngine {
    world: SharedWorld,
}

impl DeploymentEngine for FakeEngine {
    fn install_plugin(&self, plugin: &PluginRef, server: Option<&str>) -> EngineResult<()> {
        let mut world = self.world.borrow_mut();
        if world.broken_plugins.contains(&plugin.name) {
            return Err(EngineError::CommandFailed {
                command: format!("pulumi plugin install resource {}", plugin),
                status: Some(255),
                stderr: format!("error: {} not found in registry", plugin.name),
            });
        }
        world
            .installed
            .push((plugin.to_string(), server.map(str::to_string)));
        Ok(())
    }

    fn select_stack(&self, _stack: &str) -> EngineResult<()> {
        Ok(())
    }

    fn import_snapshot(&self, _stack: &str, snapshot: &Snapshot) -> EngineResult<()> {
        #[derive(serde::Deserialize)]
        struct Doc {
            resources: BTreeSet<String>,
        }
        let doc: Doc = serde_json::from_slice(snapshot.as_bytes()).map_err(|e| {
            EngineError::StateFormat {
                message: e.to_string(),
            }
        })?;
        self.world.borrow_mut().tracked = doc.resources;
        Ok(())
    }

    fn export_snapshot(&self, _stack: &str) -> EngineResult<Snapshot> {
        let world = self.world.borrow();
        let resources: Vec<&str> = world.tracked.iter().map(String::as_str).collect();
        Ok(Snapshot::from_bytes(snapshot_of(&resources)))
    }

    fn set_config(&self, _stack: &str, entry: &ConfigEntry) -> EngineResult<()> {
        self.world
            .borrow_mut()
            .config
            .insert(entry.key.clone(), entry.value.clone());
        Ok(())
    }

    fn refresh(&self, _stack: &str, identity: &UserAgent) -> EngineResult<ChangeSummary> {
        let mut world = self.world.borrow_mut();
        world.identities.push(identity.to_string());

        let gone: BTreeSet<String> = world.tracked.difference(&world.live).cloned().collect();
        let same = world.tracked.len() - gone.len();
        world.tracked.retain(|r| !gone.contains(r));

        let mut summary = ChangeSummary::new();
        if same > 0 {
            summary = summary.with("same", same as u64);
        }
        if !gone.is_empty() {
            summary = summary.with("delete", gone.len() as u64);
        }
        Ok(summary)
    }

    fn destroy(&self, _stack: &str, identity: &UserAgent) -> EngineResult<()> {
        let mut world = self.world.borrow_mut();
        world.identities.push(identity.to_string());
        let tracked = std::mem::take(&mut world.tracked);
        world.live.retain(|r| !tracked.contains(r));
        world.destroyed_runs += 1;
        Ok(())
    }

    fn update(
        &self,
        stack: &str,
        identity: &UserAgent,
        progress: Option<&dyn ProgressSink>,
    ) -> EngineResult<RunOutputs> {
        let mut world = self.world.borrow_mut();
        world.identities.push(identity.to_string());

        if let Some(sink) = progress {
            sink.write_line(&format!("Updating ({}):", stack));
        }
        let desired = world.desired.clone();
        for resource in &desired {
            if !world.tracked.contains(resource) {
                if let Some(sink) = progress {
                    sink.write_line(&format!(" +  {} creating", resource));
                }
                world.live.insert(resource.clone());
                world.tracked.insert(resource.clone());
            }
        }

        let mut outputs = RunOutputs::new().with(
            "resources",
            OutputValue::plain(world.tracked.len() as u64),
        );
        if let Some(env) = world.config.get("env") {
            outputs.insert("env", OutputValue::plain(env.clone()));
        }
        if let Some(token) = world.config.get("token") {
            outputs.insert("token", OutputValue::secret(token.clone()));
        }
        Ok(outputs)
    }
}
