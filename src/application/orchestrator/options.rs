//! Run Options
//!
//! Fully validated inputs of one run.

use std::path::PathBuf;

use crate::domain::value_objects::{ConfigEntry, OutputsDestination, PluginRef, StateLocation};

/// Default stack name
pub const DEFAULT_STACK: &str = "victor";

/// Options for one orchestrated run
#[derive(Clone)]
pub struct RunOptions {
    /// Directory holding the Pulumi program
    pub program_dir: PathBuf,
    /// Passphrase protecting stack secrets (may be empty)
    pub passphrase: String,
    /// Stack name
    pub stack: String,
    /// Where the snapshot lives
    pub location: StateLocation,
    /// Plugin download server, if not the default one
    pub plugin_server: Option<String>,
    /// Resource plugins to install, in order
    pub plugins: Vec<PluginRef>,
    /// Stack configuration, applied in order
    pub configuration: Vec<ConfigEntry>,
    /// Outputs destination; `None` skips the export
    pub outputs: Option<OutputsDestination>,
}

impl RunOptions {
    pub fn new(program_dir: impl Into<PathBuf>, location: StateLocation) -> Self {
        Self {
            program_dir: program_dir.into(),
            passphrase: String::new(),
            stack: DEFAULT_STACK.to_string(),
            location,
            plugin_server: None,
            plugins: Vec::new(),
            configuration: Vec::new(),
            outputs: None,
        }
    }

    pub fn with_passphrase(mut self, passphrase: impl Into<String>) -> Self {
        self.passphrase = passphrase.into();
        self
    }

    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = stack.into();
        self
    }

    pub fn with_plugin_server(mut self, server: Option<String>) -> Self {
        self.plugin_server = server.filter(|s| !s.is_empty());
        self
    }

    pub fn with_plugins(mut self, plugins: Vec<PluginRef>) -> Self {
        self.plugins = plugins;
        self
    }

    pub fn with_configuration(mut self, configuration: Vec<ConfigEntry>) -> Self {
        self.configuration = configuration;
        self
    }

    pub fn with_outputs(mut self, outputs: Option<OutputsDestination>) -> Self {
        self.outputs = outputs;
        self
    }
}

impl std::fmt::Debug for RunOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunOptions")
            .field("program_dir", &self.program_dir)
            .field("stack", &self.stack)
            .field("location", &self.location)
            .field("plugin_server", &self.plugin_server)
            .field("plugins", &self.plugins)
            .field("configuration", &self.configuration)
            .field("outputs", &self.outputs)
            .finish_non_exhaustive()
    }
}
