//! Domain Entities
//!
//! - `Snapshot` - Opaque serialized stack state
//! - `RunOutputs` - Outputs declared by the deployment program

mod outputs;
mod snapshot;

pub use outputs::{OutputValue, RunOutputs};
pub use snapshot::Snapshot;
