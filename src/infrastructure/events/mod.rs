//! Engine Event Sinks
//!
//! Concrete implementations of `ProgressSink`:
//! - TracingProgressSink: forwards engine progress lines to the log

mod progress;

pub use progress::TracingProgressSink;
