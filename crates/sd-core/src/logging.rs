//! Structured logging setup for the binary.

use tracing_subscriber::EnvFilter;

/// Default filter when neither `RUST_LOG` nor `-v` is given.
const DEFAULT_LEVEL: &str = "warn";

/// Map `-v` occurrences to a level.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => DEFAULT_LEVEL,
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over `verbose`. Safe to call more than once;
/// later calls are ignored.
pub fn init_logging(verbose: u8, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose)));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
