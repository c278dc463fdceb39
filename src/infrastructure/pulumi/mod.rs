//! Pulumi CLI Engine
//!
//! Implements the deployment engine ports by shelling out to the `pulumi`
//! binary. Every child runs in the program directory with the stack
//! passphrase in its environment.
//!
//! ## Structure
//!
//! - `args` - Argument lists of each engine command
//! - `command` - Child process runner with progress and cancellation
//! - `envelope` - Versioned wrapper around the raw deployment document
//! - `reports` - Parsing of history and outputs JSON
//! - `workspace` - `PulumiWorkspaceProvider` and `PulumiCli`

mod args;
mod command;
pub mod envelope;
mod reports;
mod workspace;

pub use command::{CommandRunner, Invocation};
pub use workspace::{PulumiCli, PulumiWorkspaceProvider, DEFAULT_BINARY};

/// Environment variable carrying the stack passphrase
pub const PASSPHRASE_ENV: &str = "PULUMI_CONFIG_PASSPHRASE";
