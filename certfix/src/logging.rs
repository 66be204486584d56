//! env_logger-based logging setup
//!
//! Configure levels via the `RUST_LOG` environment variable, e.g.
//! `RUST_LOG=info` or `RUST_LOG=certfix=debug`.

use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize the logging system (call once at application startup).
pub fn init() {
    INIT_LOGGER.call_once(|| {
        env_logger::Builder::from_default_env()
            .format_timestamp_micros()
            .init();
    });
}

/// Initialize logging for test environments.
///
/// Safe to call from multiple tests; initialization conflicts are ignored.
pub fn init_test() {
    let _ = env_logger::Builder::from_default_env()
        .is_test(true)
        .try_init();
}
