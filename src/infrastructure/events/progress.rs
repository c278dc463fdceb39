//! Tracing Progress Sink
//!
//! Logs each progress line the engine prints during an update, so verbose
//! runs show the engine's own output interleaved with Victor's logs.

use tracing::{info, Span};

use crate::domain::ports::ProgressSink;

/// Progress sink that emits one log event per engine line
pub struct TracingProgressSink {
    span: Span,
}

impl TracingProgressSink {
    pub fn new(span: Span) -> Self {
        Self { span }
    }
}

impl ProgressSink for TracingProgressSink {
    fn write_line(&self, line: &str) {
        let line = line.trim_end();
        if line.is_empty() {
            return;
        }
        let _entered = self.span.enter();
        info!(target: "victor::engine", line = %line, "pulumi output");
    }
}
