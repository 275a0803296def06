//! Logging setup for the command-line tool using `tracing_subscriber`.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Sends log output to stderr.
///
/// `RUST_LOG` takes precedence; otherwise only warnings are shown, or debug
/// output for this crate when `verbose` is set.
pub fn setup_logging(verbose: bool, ansi: bool) {
    let dirs = if verbose { "warn,radix64=debug" } else { "warn" };

    let main_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .without_time();

    // A subscriber may already be installed when embedded
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(dirs)))
        .with(main_layer)
        .try_init();
}
