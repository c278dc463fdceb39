//! State Store Port
//!
//! Moves an opaque snapshot to and from a single remote location.
//! The store never inspects the bytes it carries.

use thiserror::Error;

use crate::domain::entities::Snapshot;
use crate::domain::value_objects::StateLocation;

/// Result of fetching the remote state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A previous run pushed this snapshot
    Found(Snapshot),
    /// Nothing was ever pushed here; the stack starts fresh
    NotFound,
}

/// Error talking to the remote state store
#[derive(Error, Debug)]
pub enum RemoteStateError {
    /// The location is not a usable URL
    #[error("invalid state location '{location}': {reason}")]
    InvalidLocation { location: String, reason: String },

    /// The request could not be sent or the response could not be read
    #[error("while {method} {location}: {message}")]
    Transport {
        method: &'static str,
        location: String,
        message: String,
    },

    /// The webserver answered with a non-success status
    #[error("{method} {location} returned HTTP {status}")]
    Status {
        method: &'static str,
        location: String,
        status: u16,
    },
}

/// Remote store for stack snapshots
///
/// Implementations:
/// - `RemoteStateClient`: plain HTTP GET/PUT against a webserver
/// - in-memory stores in tests
pub trait StateStore {
    /// Fetch the snapshot; a missing one is `FetchOutcome::NotFound`, not an error
    fn fetch(&self, location: &StateLocation) -> Result<FetchOutcome, RemoteStateError>;

    /// Replace the remote content with `snapshot`
    fn push(&self, location: &StateLocation, snapshot: &Snapshot) -> Result<(), RemoteStateError>;
}
