//! Logging setup for the command-line binary.
//!
//! The library only emits `tracing` events (and a few `log` records from the
//! config loader, which `tracing-subscriber` bridges). Nothing is printed
//! until the binary installs a subscriber here. Logs always go to stderr so
//! JSON reports on stdout stay machine-readable.
//!
//! `RUST_LOG` takes precedence over the `-v` count:
//!
//! ```ignore
//! use program_health::observability::init_tracing;
//!
//! fn main() {
//!     init_tracing(1); // info for this crate, warn elsewhere
//! }
//! ```

use tracing_subscriber::EnvFilter;

/// Default filter directive for a `-v` count.
pub fn verbosity_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "warn,program_health=info",
        2 => "warn,program_health=debug",
        _ => "trace",
    }
}

fn build_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity_directive(verbosity)))
}

/// Install the global subscriber. Calling it twice is harmless; the second
/// call is ignored.
pub fn init_tracing(verbosity: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(verbosity >= 2)
        .try_init();
}
