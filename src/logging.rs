//! Tracing subscriber setup
//!
//! Log lines go to stderr so they never mix with the confirmation line on
//! stdout. The level comes from the `-v` count, not from the environment.

use tracing::Level;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Map a `-v` count to a maximum log level. Warnings are always shown.
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Build the subscriber used by the binary.
pub fn build_subscriber(verbosity: u8) -> impl tracing::Subscriber + Send + Sync {
    let env_filter = EnvFilter::default().add_directive(level_for(verbosity).into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    tracing_subscriber::registry().with(fmt_layer).with(env_filter)
}

/// Install the global subscriber. Does nothing if one is already set.
pub fn init(verbosity: u8) {
    let _ = build_subscriber(verbosity).try_init();
}
