//! Logging setup for `sac_rust`.
//!
//! Diagnostics go to stderr so stdout stays clean for command output.
//! Verbosity is driven by `-v`/`-q`; `RUST_LOG` overrides both.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(
    verbose: u8,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
}
