//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `http/` - Remote state store over HTTP (`RemoteStateClient`)
//! - `pulumi/` - Deployment engine backed by the `pulumi` CLI
//! - `events/` - Progress sinks
//! - `signal` - Interrupt handling and cancellation

pub mod events;
pub mod http;
pub mod pulumi;
pub mod signal;

// Re-export for convenience
pub use events::TracingProgressSink;
pub use http::RemoteStateClient;
pub use pulumi::{PulumiCli, PulumiWorkspaceProvider};
pub use signal::{install_handler, CancelToken};
