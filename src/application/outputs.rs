//! Outputs Export
//!
//! Writes the run outputs as a JSON object to standard output or a file.
//! File writes go through a temporary sibling that is renamed into place, so
//! a reader never observes a half-written document.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::entities::RunOutputs;
use crate::domain::value_objects::OutputsDestination;

/// Failure while exporting outputs
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("serializing outputs: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("writing outputs to {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Exports outputs to the configured destination, if any
#[derive(Debug, Clone, Default)]
pub struct OutputsExporter {
    destination: Option<OutputsDestination>,
}

impl OutputsExporter {
    pub fn new(destination: Option<OutputsDestination>) -> Self {
        Self { destination }
    }

    /// Export to the process standard output or to a file
    ///
    /// Returns `false` when no destination is configured and nothing was written.
    pub fn export(&self, outputs: &RunOutputs) -> Result<bool, ExportError> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.export_to(outputs, &mut lock)
    }

    /// Same as [`export`](Self::export) with `stdout` standing in for standard output
    pub fn export_to<W: Write>(
        &self,
        outputs: &RunOutputs,
        stdout: &mut W,
    ) -> Result<bool, ExportError> {
        let Some(destination) = &self.destination else {
            return Ok(false);
        };

        let document = outputs.to_json()?;
        match destination {
            OutputsDestination::Stdout => {
                writeln!(stdout, "{}", document)
                    .and_then(|_| stdout.flush())
                    .map_err(|source| ExportError::Io {
                        path: PathBuf::from("-"),
                        source,
                    })?;
            }
            OutputsDestination::File(path) => {
                write_atomic(path, document.as_bytes()).map_err(|source| ExportError::Io {
                    path: path.clone(),
                    source,
                })?;
            }
        }
        Ok(true)
    }
}

fn write_atomic(path: &Path, content: &[u8]) -> io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut temp = tempfile::NamedTempFile::new_in(parent)?;
    temp.write_all(content)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
