//! Log level selection

use tracing_subscriber::EnvFilter;

/// Level used when the configured filter does not parse
pub const FALLBACK_LOG_LEVEL: &str = "warn";

/// Map `-v` occurrences onto a tracing filter, falling back to `configured`
pub fn get_log_level(verbose: u8, configured: &str) -> String {
    match verbose {
        0 => configured.to_string(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Build the tracing filter for `level`
///
/// An unparseable level falls back to [`FALLBACK_LOG_LEVEL`] and the second
/// element carries a message for the user explaining why.
pub fn build_env_filter(level: &str) -> (EnvFilter, Option<String>) {
    match EnvFilter::try_new(level) {
        Ok(filter) => (filter, None),
        Err(e) => (
            EnvFilter::new(FALLBACK_LOG_LEVEL),
            Some(format!(
                "Ignoring invalid log level '{}': {}; using '{}'",
                level, e, FALLBACK_LOG_LEVEL
            )),
        ),
    }
}
