//! Tracing subscriber setup for binaries.

use tracing_subscriber::EnvFilter;

/// Install a stderr `fmt` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_directive` (for example
/// `"info"` or `"debug"`) is used. Library code never calls this.
///
/// # Errors
///
/// Returns an error if a global subscriber was already installed or the
/// directive does not parse.
pub fn init_tracing(default_directive: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directive)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()?;

    Ok(())
}
