//! Interrupt Handling
//!
//! Ctrl+C and SIGTERM do not kill Victor outright: they are counted on a
//! `CancelToken`, and the running engine command reacts to the count.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared count of cancellation requests
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    requests: Arc<AtomicUsize>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one more cancellation request
    pub fn cancel(&self) {
        self.requests.fetch_add(1, Ordering::SeqCst);
    }

    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

/// Route interrupt and termination signals to `token`
pub fn install_handler(token: CancelToken) -> Result<(), ctrlc::Error> {
    // runs on the ctrlc thread, outside the scoped subscriber: no logging here
    ctrlc::set_handler(move || token.cancel())
}
