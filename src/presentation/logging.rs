//! Log subscriber for the binary
//!
//! The library only emits `tracing` events under the spans it is given; the
//! binary decides where they go. Logs always go to stderr so that
//! `--outputs -` keeps stdout machine-readable.

use tracing::Dispatch;
use tracing_subscriber::EnvFilter;

use super::cli::LogFormat;

/// Filter used when `RUST_LOG` is not set
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "victor=info"
    } else {
        "victor=warn"
    }
}

/// `RUST_LOG` when set and valid, the verbosity default otherwise
pub fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Build the dispatcher to install with `tracing::dispatcher::with_default`
pub fn dispatch(verbose: bool, format: LogFormat) -> Dispatch {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => Dispatch::new(builder.finish()),
        LogFormat::Json => Dispatch::new(builder.json().finish()),
    }
}
