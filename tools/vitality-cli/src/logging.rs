//! Log subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Install the global subscriber. Logs go to stderr.
///
/// `RUST_LOG` wins over the configured level; `--verbose` wins over both.
pub fn init(config: &LoggingConfig, verbose: bool) {
    let filter = filter(config, verbose, std::env::var("RUST_LOG").ok().as_deref());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    // An already-installed subscriber stays in place.
    let _ = match config.format {
        LogFormat::Human => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}

fn filter(config: &LoggingConfig, verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    let directive = if verbose {
        "debug"
    } else {
        rust_log
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(config.level.as_str())
    };
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
}
