//! Snapshot Entity
//!
//! The serialized state of a stack, as produced by the deployment engine.
//! Victor only moves these bytes around; it never looks inside them.

use std::fmt;

use sha2::{Digest, Sha256};

/// Opaque stack state
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    bytes: Vec<u8>,
}

impl Snapshot {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// SHA-256 of the content, `sha256:` prefixed (for logs)
    pub fn digest(&self) -> String {
        format!("sha256:{:x}", Sha256::digest(&self.bytes))
    }
}

// State may embed encrypted secrets and can be large, so Debug only shows a summary.
impl fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snapshot")
            .field("len", &self.bytes.len())
            .field("digest", &self.digest())
            .finish()
    }
}
