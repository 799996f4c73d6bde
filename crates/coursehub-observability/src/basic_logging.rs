use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const CRATES: &[&str] = &[
    "coursehub",
    "coursehub_core",
    "coursehub_config",
    "coursehub_models",
    "coursehub_db",
    "coursehub_auth",
];

/// `RUST_LOG` wins when set; otherwise every CourseHub crate logs at
/// `LOG_LEVEL` (default "info") and dependencies at warn.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let directives = CRATES
            .iter()
            .map(|krate| format!("{}={}", krate, log_level))
            .chain(std::iter::once("sqlx=warn".to_string()))
            .collect::<Vec<_>>()
            .join(",");
        EnvFilter::new(directives)
    })
}

/// Initialize console logging.
///
/// # Configuration
///
/// - **Log Level**: `LOG_LEVEL` (default: "info"), overridden by `RUST_LOG`
/// - **Output**: stderr, so stdout stays free for command output
/// - **Format**: compact with ANSI colors, or JSON lines when
///   `LOG_FORMAT=json`
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init_basic_console_logging() {
    let json = std::env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json"));

    let console_layer = if json {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_current_span(true)
            .with_span_list(true)
            .with_filter(env_filter())
            .boxed()
    } else {
        fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(true)
            .with_filter(env_filter())
            .boxed()
    };

    tracing_subscriber::registry().with(console_layer).init();
}

/// Install a test-writer subscriber once per process; later calls are no-ops.
pub fn try_init_test_logging() {
    let _ = fmt()
        .with_env_filter(env_filter())
        .with_test_writer()
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_init_test_logging_is_idempotent() {
        try_init_test_logging();
        try_init_test_logging();
        tracing::debug!("still fine");
    }
}
