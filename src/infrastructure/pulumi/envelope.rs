//! Deployment envelope
//!
//! The remote blob is the engine's raw `deployment` document. The engine
//! imports and exports it wrapped as `{"version": 3, "deployment": ...}`.
//! The deployment text is carried through unchanged in both directions.

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::domain::entities::Snapshot;
use crate::domain::ports::{EngineError, EngineResult};

/// Only deployment schema this adapter reads and writes
pub const DEPLOYMENT_SCHEMA_VERSION: u64 = 3;

#[derive(Serialize)]
struct Outgoing<'a> {
    version: u64,
    deployment: &'a RawValue,
}

#[derive(Deserialize)]
struct Incoming<'a> {
    version: u64,
    #[serde(borrow)]
    deployment: &'a RawValue,
}

fn invalid(message: impl Into<String>) -> EngineError {
    EngineError::StateFormat {
        message: message.into(),
    }
}

/// Wrap a raw deployment for `pulumi stack import`
pub fn wrap(snapshot: &Snapshot) -> EngineResult<Vec<u8>> {
    let text = std::str::from_utf8(snapshot.as_bytes())
        .map_err(|e| invalid(format!("remote state is not UTF-8: {}", e)))?;
    let deployment: &RawValue = serde_json::from_str(text)
        .map_err(|e| invalid(format!("remote state is not a JSON document: {}", e)))?;

    serde_json::to_vec(&Outgoing {
        version: DEPLOYMENT_SCHEMA_VERSION,
        deployment,
    })
    .map_err(|e| invalid(e.to_string()))
}

/// Extract the raw deployment from `pulumi stack export` output
pub fn unwrap(exported: &str) -> EngineResult<Snapshot> {
    let envelope: Incoming<'_> = serde_json::from_str(exported)
        .map_err(|e| invalid(format!("exported state is not a deployment envelope: {}", e)))?;

    if envelope.version != DEPLOYMENT_SCHEMA_VERSION {
        return Err(invalid(format!(
            "unsupported deployment version {}, expected {}",
            envelope.version, DEPLOYMENT_SCHEMA_VERSION
        )));
    }
    Ok(Snapshot::from_bytes(envelope.deployment.get().as_bytes()))
}
