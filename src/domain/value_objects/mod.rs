//! Domain Value Objects
//!
//! Immutable value types parsed from the run configuration.

mod change_summary;
mod config_entry;
mod credentials;
mod outputs_destination;
mod plugin_ref;
mod reference;
mod state_location;
mod user_agent;

pub use change_summary::ChangeSummary;
pub use config_entry::ConfigEntry;
pub use credentials::Credentials;
pub use outputs_destination::OutputsDestination;
pub use plugin_ref::PluginRef;
pub use reference::ParseReferenceError;
pub use state_location::StateLocation;
pub use user_agent::UserAgent;
