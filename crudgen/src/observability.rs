//! Logging setup
//!
//! Status lines for the user go to stdout. Diagnostics go through `tracing`
//! to stderr, filtered by `RUST_LOG` when it is set.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber
///
/// Without `RUST_LOG`, only warnings are shown, or `debug` for this crate
/// when `verbose` is set.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(verbose: bool) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("warn,crudgen=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()?;

    Ok(())
}
