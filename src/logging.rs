use tracing_subscriber::EnvFilter;

/// Environment variable that takes precedence over the configured filter.
pub const LOG_ENV: &str = "PASSGEN_LOG";

/// Builds the filter: `PASSGEN_LOG` if set and valid, else `fallback`, else `info`.
pub fn build_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global fmt subscriber. Later calls are no-ops.
pub fn init_logging(fallback: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(fallback))
        .with_target(false)
        .try_init();
}
