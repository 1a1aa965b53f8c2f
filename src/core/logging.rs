//! Logger setup for binaries.
//!
//! Library code only emits through the `log` facade; binaries call `init`
//! once at startup. `RUST_LOG` overrides the default `info` level.

use env_logger::Env;

/// Initialise `env_logger` with an `info` default.
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();
}
