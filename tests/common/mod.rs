//! Common test utilities for Victor scenario and CLI tests.
//!
//! This module provides:
//! - `StateServer`: in-process webserver holding the state file
//! - `FakeWorkspace`/`FakeEngine`: in-memory engine over a shared `World`
//! - `orchestrator`/`options`: in-process runs over the two above
//! - `TestEnv`: temp program directory plus helpers to run the binary

#![allow(dead_code)]

pub mod env;
pub mod harness;
pub mod fake_engine;

pub use env::*;
pub use harness::*;
pub use fake_engine::*;
pub use fake_server::*;
