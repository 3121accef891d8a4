//! Tracing setup for the CLI.

use tracing_subscriber::EnvFilter;

/// Initialize tracing.
///
/// Quiet by default; set `RUST_LOG` to raise verbosity. Output goes to
/// stderr so stdout stays machine-readable for piped use.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
