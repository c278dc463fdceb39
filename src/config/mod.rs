//! Configuration module for Victor
//!
//! Configuration hierarchy:
//! 1. CLI flags
//! 2. Environment variables (`PLUGIN_*`, as set by Drone for plugin steps)
//! 3. Optional TOML config file (`--config`)
//! 4. Built-in defaults
//!
//! Scalars from a higher level replace lower ones. Lists (resources and
//! configuration entries) are concatenated, file entries first.

mod loader;
mod types;

pub use loader::{load_with_warnings, ConfigWarning};
pub use types::{ConfigError, ConfigLayer, FileConfig, RunConfig};
