use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Default directives when neither `RUST_LOG` nor a configured filter is set.
pub const DEFAULT_FILTER: &str = "info,tower_http=info,axum=info,sqlx=warn";

fn env_filter(fallback: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback.unwrap_or(DEFAULT_FILTER)))
}

/// Initialize tracing subscriber with compact human-readable output.
/// - Respects `RUST_LOG` if set
/// - Falls back to `fallback`, then to [`DEFAULT_FILTER`]
/// - Writes to stdout
pub fn init_logging_default(fallback: Option<&str>) {
    let _ = fmt()
        .with_env_filter(env_filter(fallback))
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}

/// Initialize tracing subscriber with JSON structured output, one object per
/// line, for container log collectors.
pub fn init_logging_json(fallback: Option<&str>) {
    let _ = fmt()
        .with_env_filter(env_filter(fallback))
        .with_target(false)
        .json()
        .with_writer(io::stdout)
        .try_init();
}

/// Pick the subscriber flavour at runtime.
pub fn init_logging(json: bool, fallback: Option<&str>) {
    if json {
        init_logging_json(fallback);
    } else {
        init_logging_default(fallback);
    }
}
