//! Configuration types

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use crate::application::orchestrator::DEFAULT_STACK;
use crate::application::RunOptions;
use crate::domain::value_objects::{
    ConfigEntry, Credentials, OutputsDestination, ParseReferenceError, PluginRef, StateLocation,
};

/// Default program directory
pub const DEFAULT_CONTEXT: &str = ".";
/// Default engine binary
pub const DEFAULT_PULUMI_BIN: &str = "pulumi";

/// Configuration errors, reported before any work starts
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no state file location: pass --statefile or set PLUGIN_STATEFILE")]
    MissingStatefile,

    #[error("invalid {field}: {source}")]
    Invalid {
        field: &'static str,
        #[source]
        source: ParseReferenceError,
    },

    #[error("reading config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing config file {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}

/// Contents of the optional TOML config file
///
/// ```toml
/// statefile = "https://state.example/ctf.json"
/// context = "./infra"
/// resources = ["kubernetes 4.18.0"]
///
/// [configuration]
/// "ctf:domain" = "ctf.example"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub verbose: Option<bool>,
    pub statefile: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub passphrase: Option<String>,
    pub context: Option<PathBuf>,
    pub server: Option<String>,
    pub resources: Vec<String>,
    pub configuration: BTreeMap<String, String>,
    pub outputs: Option<String>,
    pub stack: Option<String>,
    pub pulumi_bin: Option<PathBuf>,
}

impl FileConfig {
    pub fn into_layer(self) -> ConfigLayer {
        ConfigLayer {
            verbose: self.verbose,
            statefile: self.statefile,
            username: self.username,
            password: self.password,
            passphrase: self.passphrase,
            context: self.context,
            server: self.server,
            resources: self.resources,
            configuration: self
                .configuration
                .into_iter()
                .map(|(key, value)| format!("{} {}", key, value))
                .collect(),
            outputs: self.outputs,
            stack: self.stack,
            pulumi_bin: self.pulumi_bin,
        }
    }
}

/// One source of unvalidated settings
///
/// `None` means "not provided"; `Some("")` is a provided empty value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigLayer {
    pub verbose: Option<bool>,
    pub statefile: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub passphrase: Option<String>,
    pub context: Option<PathBuf>,
    pub server: Option<String>,
    /// `"<name> <version>"` references
    pub resources: Vec<String>,
    /// `"<key> <value>"` references
    pub configuration: Vec<String>,
    pub outputs: Option<String>,
    pub stack: Option<String>,
    pub pulumi_bin: Option<PathBuf>,
}

impl ConfigLayer {
    /// Layer `over` on top of `self`
    pub fn merge(self, over: ConfigLayer) -> ConfigLayer {
        let mut resources = self.resources;
        resources.extend(over.resources);
        let mut configuration = self.configuration;
        configuration.extend(over.configuration);

        ConfigLayer {
            verbose: over.verbose.or(self.verbose),
            statefile: over.statefile.or(self.statefile),
            username: over.username.or(self.username),
            password: over.password.or(self.password),
            passphrase: over.passphrase.or(self.passphrase),
            context: over.context.or(self.context),
            server: over.server.or(self.server),
            resources,
            configuration,
            outputs: over.outputs.or(self.outputs),
            stack: over.stack.or(self.stack),
            pulumi_bin: over.pulumi_bin.or(self.pulumi_bin),
        }
    }
}

/// Fully resolved and validated run configuration
#[derive(Clone)]
pub struct RunConfig {
    pub verbose: bool,
    pub statefile: StateLocation,
    pub credentials: Credentials,
    pub passphrase: String,
    pub context: PathBuf,
    pub server: Option<String>,
    pub resources: Vec<PluginRef>,
    pub configuration: Vec<ConfigEntry>,
    pub outputs: Option<OutputsDestination>,
    pub stack: String,
    pub pulumi_bin: PathBuf,
}

impl std::fmt::Debug for RunConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunConfig")
            .field("verbose", &self.verbose)
            .field("statefile", &self.statefile)
            .field("credentials", &self.credentials)
            .field("context", &self.context)
            .field("server", &self.server)
            .field("resources", &self.resources)
            .field("configuration", &self.configuration)
            .field("outputs", &self.outputs)
            .field("stack", &self.stack)
            .field("pulumi_bin", &self.pulumi_bin)
            .finish_non_exhaustive()
    }
}

impl RunConfig {
    /// Validate a merged layer
    pub fn resolve(layer: ConfigLayer) -> Result<Self, ConfigError> {
        let statefile = layer
            .statefile
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingStatefile)?
            .parse::<StateLocation>()
            .map_err(|source| ConfigError::Invalid {
                field: "statefile",
                source,
            })?;

        let resources = layer
            .resources
            .iter()
            .map(|r| r.parse::<PluginRef>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| ConfigError::Invalid {
                field: "resources",
                source,
            })?;

        let configuration = layer
            .configuration
            .iter()
            .map(|c| c.parse::<ConfigEntry>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| ConfigError::Invalid {
                field: "configuration",
                source,
            })?;

        let outputs = layer
            .outputs
            .map(|o| o.parse::<OutputsDestination>())
            .transpose()
            .map_err(|source| ConfigError::Invalid {
                field: "outputs",
                source,
            })?;

        Ok(Self {
            verbose: layer.verbose.unwrap_or(false),
            statefile,
            credentials: Credentials::new(layer.username, layer.password),
            passphrase: layer.passphrase.unwrap_or_default(),
            context: layer
                .context
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTEXT)),
            server: layer.server,
            resources,
            configuration,
            outputs,
            stack: layer
                .stack
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_STACK.to_string()),
            pulumi_bin: layer
                .pulumi_bin
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PULUMI_BIN)),
        })
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions::new(&self.context, self.statefile.clone())
            .with_passphrase(self.passphrase.clone())
            .with_stack(self.stack.clone())
            .with_plugin_server(self.server.clone())
            .with_plugins(self.resources.clone())
            .with_configuration(self.configuration.clone())
            .with_outputs(self.outputs.clone())
    }
}
