//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system at `info` level
///
/// `RUST_LOG` overrides the default when set.
pub fn init() {
    init_with_level("info");
}

/// Initialize the logging system with a default level filter such as `"debug"`
///
/// Safe to call more than once; later calls are ignored.
pub fn init_with_level(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::debug!("Logger already initialized");
    }
}
