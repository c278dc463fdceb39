//! Progress Sink Port
//!
//! Receives the human-readable progress lines the engine prints while it
//! updates a stack. Only injected when verbose output is requested.

/// Line-oriented progress receiver
pub trait ProgressSink {
    /// Handle one line of engine output (without the trailing newline)
    fn write_line(&self, line: &str);
}
