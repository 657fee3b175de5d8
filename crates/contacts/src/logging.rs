//! Tracing setup. Logs go to stderr; `RUST_LOG` directives refine the default level.

use tracing::Level;

/// Install the global subscriber.
///
/// # Errors
///
/// Returns error if a subscriber is already installed
pub fn init_tracing(level: Level) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {e}"))
}
