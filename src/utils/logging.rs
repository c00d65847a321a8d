//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the EventHub client.

use std::path::Path;
use tracing::{info, warn, error, debug, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};
use crate::config::LoggingConfig;
use crate::utils::errors::{EventHubError, Result};

/// Initialize logging based on configuration.
///
/// The returned guard must be held for the life of the process when a log
/// file is configured, otherwise buffered lines are lost on exit.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| EventHubError::Config(format!("Invalid log filter {}: {}", config.level, e)))?;

    let stderr_layer = if config.json {
        tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr).boxed()
    } else {
        tracing_subscriber::fmt::layer().with_writer(std::io::stderr).boxed()
    };

    let (file_layer, guard) = match config.file_path.as_deref() {
        Some(file_path) => {
            let path = Path::new(file_path);
            let directory = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or_else(|| Path::new("."));
            let file_name = path.file_name().map(|n| n.to_os_string()).unwrap_or_else(|| "eventhub.log".into());
            let file_appender = tracing_appender::rolling::daily(directory, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| EventHubError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log an outgoing API request
pub fn log_api_request(method: &str, path: &str, authenticated: bool) {
    debug!(
        method = method,
        path = path,
        authenticated = authenticated,
        "API request"
    );
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

/// Level for a non-2xx response: server faults are errors, a missing
/// resource is routine, other client errors are warnings
pub fn failure_level(status: u16) -> Level {
    match status {
        500..=599 => Level::ERROR,
        404 => Level::DEBUG,
        _ => Level::WARN,
    }
}

/// Log a non-2xx API response at a level matching its status
pub fn log_api_failure(api: &str, status: u16, message: Option<&str>, context: Option<&str>) {
    match failure_level(status) {
        Level::ERROR => error!(api = api, status = status, server_message = message, context = context, "API request failed"),
        Level::WARN => warn!(api = api, status = status, server_message = message, context = context, "API request rejected"),
        _ => debug!(api = api, status = status, server_message = message, context = context, "API resource not found"),
    }
}

/// Log registration actions
pub fn log_event_action(event_id: i64, action: &str, user_id: Option<i64>, details: Option<&str>) {
    info!(
        event_id = event_id,
        action = action,
        user_id = user_id,
        details = details,
        "Event action performed"
    );
}

/// Log the outcome of a listing rebuild
pub fn log_listing_built(category: Option<&str>, fetched: usize, shown: usize, excluded_registered: usize) {
    debug!(
        category = category,
        fetched = fetched,
        shown = shown,
        excluded_registered = excluded_registered,
        "Event listing built"
    );
}

/// Log an authentication problem
pub fn log_auth_warning(reason: &str) {
    warn!(reason = reason, "Authentication problem");
}
