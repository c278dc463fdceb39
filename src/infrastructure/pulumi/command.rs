//! Engine child process runner
//!
//! Spawns one engine command, forwards its stdout lines to an optional
//! progress sink while it runs, and reacts to cancellation requests:
//! the first one interrupts the child so the engine can stop cleanly, any
//! further one kills it.

use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::ports::{EngineError, EngineResult, ProgressSink};
use crate::infrastructure::signal::CancelToken;

use super::PASSPHRASE_ENV;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Arguments of one engine command
#[derive(Clone, PartialEq, Eq)]
pub struct Invocation {
    args: Vec<String>,
    redact_last: bool,
}

impl Invocation {
    pub fn new(args: Vec<String>) -> Self {
        Self {
            args,
            redact_last: false,
        }
    }

    /// Mask the last argument whenever the command is described
    pub fn redacting_last(mut self) -> Self {
        self.redact_last = true;
        self
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Human-readable command line, safe to log and to put in errors
    pub fn describe(&self, binary: &str) -> String {
        let last = self.args.len().saturating_sub(1);
        let shown: Vec<&str> = self
            .args
            .iter()
            .enumerate()
            .map(|(i, arg)| {
                if self.redact_last && i == last {
                    "***"
                } else {
                    arg.as_str()
                }
            })
            .collect();
        format!("{} {}", binary, shown.join(" "))
    }
}

impl std::fmt::Debug for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe("pulumi"))
    }
}

/// Runs engine commands inside one program directory
#[derive(Clone)]
pub struct CommandRunner {
    binary: PathBuf,
    program_dir: PathBuf,
    passphrase: String,
    cancel: CancelToken,
}

impl CommandRunner {
    pub fn new(
        binary: impl Into<PathBuf>,
        program_dir: impl Into<PathBuf>,
        passphrase: impl Into<String>,
        cancel: CancelToken,
    ) -> Self {
        Self {
            binary: binary.into(),
            program_dir: program_dir.into(),
            passphrase: passphrase.into(),
            cancel,
        }
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    fn binary_name(&self) -> String {
        self.binary.display().to_string()
    }

    /// Run to completion and return the captured stdout
    pub fn run(
        &self,
        invocation: &Invocation,
        progress: Option<&dyn ProgressSink>,
    ) -> EngineResult<String> {
        let command = invocation.describe(&self.binary_name());
        debug!(command = %command, "running engine command");

        let mut builder = Command::new(&self.binary);
        builder
            .args(invocation.args())
            .current_dir(&self.program_dir)
            .env(PASSPHRASE_ENV, &self.passphrase)
            .env("PULUMI_SKIP_UPDATE_CHECK", "true")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        // Own process group: a terminal ^C reaches Victor only, and the
        // engine gets exactly one SIGINT per request, from `interrupt`.
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            builder.process_group(0);
        }

        let mut child = builder.spawn().map_err(|error| match error.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
                EngineError::Unavailable {
                    binary: self.binary_name(),
                    message: error.to_string(),
                }
            }
            _ => EngineError::Io(error),
        })?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        let (lines_tx, lines_rx) = mpsc::channel::<String>();
        let stdout_reader = thread::spawn(move || {
            let Some(stdout) = stdout else { return };
            for line in BufReader::new(stdout).lines() {
                let Ok(line) = line else { break };
                if lines_tx.send(line).is_err() {
                    break;
                }
            }
        });
        let stderr_reader = thread::spawn(move || {
            let mut buf = String::new();
            if let Some(mut stderr) = stderr {
                let _ = stderr.read_to_string(&mut buf);
            }
            buf
        });

        let mut captured = String::new();
        let mut forward = |line: String| {
            if let Some(sink) = progress {
                sink.write_line(&line);
            }
            captured.push_str(&line);
            captured.push('\n');
        };

        let mut handled = 0usize;
        let status: ExitStatus = loop {
            // a chatty child must not starve the cancellation and exit checks
            match lines_rx.recv_timeout(POLL_INTERVAL) {
                Ok(line) => forward(line),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => thread::sleep(POLL_INTERVAL),
            }

            let requested = self.cancel.requests();
            if requested > handled {
                handled = requested;
                warn!(command = %command, requests = requested, "cancelling engine command");
                if let Err(error) = interrupt(&mut child, requested) {
                    warn!(error = %error, "could not signal the engine process");
                }
            }

            if let Some(status) = child.try_wait()? {
                break status;
            }
        };

        let _ = stdout_reader.join();
        for line in lines_rx.try_iter() {
            forward(line);
        }
        let stderr = stderr_reader.join().unwrap_or_default();

        if status.success() {
            return Ok(captured);
        }
        if handled > 0 {
            return Err(EngineError::Cancelled { command });
        }
        Err(EngineError::CommandFailed {
            command,
            status: status.code(),
            stderr: stderr.trim().to_string(),
        })
    }
}

/// First request: SIGINT so the engine stops gracefully. Later ones: kill.
fn interrupt(child: &mut Child, requests: usize) -> io::Result<()> {
    if requests > 1 {
        return child.kill();
    }

    #[cfg(unix)]
    {
        use nix::sys::signal::{kill, Signal};
        use nix::unistd::Pid;

        let pid = i32::try_from(child.id()).map_err(|_| io::Error::other("pid out of range"))?;
        kill(Pid::from_raw(pid), Signal::SIGINT).map_err(io::Error::from)
    }

    #[cfg(not(unix))]
    {
        child.kill()
    }
}
