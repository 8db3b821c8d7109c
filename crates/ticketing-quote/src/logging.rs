//! Tracing subscriber setup for the CLI.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;

/// Installs the global subscriber. `RUST_LOG` wins over `settings.level`.
///
/// Logs go to stderr so stdout stays clean for the JSON quote.
pub fn init_tracing(settings: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.level.as_str()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    // try_init: a second call (e.g. from tests) is a no-op
    let _ = if settings.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
