//! Logging initialization for the `fx` CLI.
//!
//! Diagnostics go to stderr so `--json` output on stdout stays clean.
//! `RUST_LOG` wins over the verbosity flags when set.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber from CLI verbosity flags.
///
/// # Errors
///
/// Returns an error message if a subscriber is already installed.
pub fn init_logging(verbose: u8, quiet: bool) -> Result<(), String> {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| e.to_string())
}
