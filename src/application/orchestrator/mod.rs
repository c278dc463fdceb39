//! Orchestrator Module
//!
//! Runs one deployment end to end.
//!
//! ## Structure
//!
//! - `options` - What to run (`RunOptions`)
//! - `result` - What happened (`RunReport`)
//! - `use_case` - The pipeline itself (`Orchestrator`)
//!
//! ## Usage
//!
//! ```ignore
//! use victor::application::{Orchestrator, RunOptions};
//!
//! let orchestrator = Orchestrator::new(workspace, store, identity, span);
//! let report = orchestrator.run(&RunOptions::new(program_dir, location))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::{RunOptions, DEFAULT_STACK};
pub use result::RunReport;
pub use use_case::Orchestrator;
