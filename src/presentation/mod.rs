//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Wiring the orchestrator with its infrastructure dependencies
//! - Log subscriber setup
//!
//! ## Structure
//!
//! - `cli` - Flags and their `PLUGIN_*` environment fallbacks
//! - `factory` - Configuration resolution and dependency injection
//! - `logging` - `tracing` dispatcher for the binary
//!
//! ## Usage
//!
//! ```ignore
//! use victor::presentation::factory;
//!
//! let (config, warnings) = factory::resolve_config(&cli)?;
//! let orchestrator = factory::create_orchestrator(&config, cancel, span)?;
//! let report = orchestrator.run(&config.run_options())?;
//! ```

pub mod cli;
pub mod factory;
pub mod logging;

pub use cli::{Cli, LogFormat};
pub use factory::{create_orchestrator, resolve_config};
