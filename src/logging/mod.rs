//! Logging setup for the stockdash binaries
//!
//! - Production (`APP_ENV=production`): JSON lines on stdout
//! - Otherwise: ANSI text on stderr, so the console report keeps stdout
//!
//! HTTP request spans from `TraceLayer` are emitted at `debug`, and
//! per-indicator computation logs are `debug` too, so run with
//! `RUST_LOG=stockdash=debug,tower_http=debug` to see them.

use crate::config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. `RUST_LOG` overrides the default `info`
/// filter; dataset loads and dropped-row warnings show at that level.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if config::is_production() {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(std::io::stdout),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
