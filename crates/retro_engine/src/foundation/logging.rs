//! Logging setup

/// Initialize the logging system with a default filter
///
/// `RUST_LOG` still wins when it is set. Calling this twice is harmless;
/// the second logger is ignored.
pub fn init_with_filter(default_filter: &str) {
    let env = env_logger::Env::default().default_filter_or(default_filter);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .try_init();
}
