//! Logging configuration and setup
//!
//! Check lines go to stdout; tracing output goes to stderr (and optionally a
//! daily rolling file) so the two never interleave in captured output.

use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use crate::config::LoggingConfig;
use crate::utils::errors::{ProbeError, Result};

/// Initialize logging based on configuration.
///
/// `RUST_LOG` wins over `logging.level` when set. The returned guard must be
/// held for the life of the process when a log file is configured.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let guard = match &config.file_path {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "hr-api-probe.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .with(tracing_subscriber::fmt::layer().json().with_writer(non_blocking))
                .try_init()
                .map_err(|e| ProbeError::Config(format!("Failed to install logger: {}", e)))?;
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .try_init()
                .map_err(|e| ProbeError::Config(format!("Failed to install logger: {}", e)))?;
            None
        }
    };

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a single check result
pub fn log_check_result(name: &str, success: bool, details: &str) {
    if success {
        debug!(check = name, "Check passed");
    } else {
        warn!(check = name, details = details, "Check failed");
    }
}

/// Log API errors with context
pub fn log_api_error(api: &str, error: &str, context: Option<&str>) {
    error!(
        api = api,
        error = error,
        context = context,
        "API error occurred"
    );
}

/// Log a completed HTTP exchange
pub fn log_exchange(method: &str, url: &str, status: u16, duration_ms: u64) {
    debug!(
        method = method,
        url = url,
        status = status,
        duration_ms = duration_ms,
        "HTTP exchange completed"
    );
}
