//! Domain Layer
//!
//! The deployment vocabulary of Victor, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Snapshots and run outputs produced by the engine
//! - `value_objects/` - Plugin references, configuration entries, locations
//! - `ports/` - Interfaces to the state store and the deployment engine
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Ports & Adapters** - The webserver and Pulumi are reached through traits

pub mod entities;
pub mod ports;
pub mod value_objects;
