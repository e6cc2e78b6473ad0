//! Logging Infrastructure
//!
//! Structured logging setup for development (pretty console) and production
//! (JSON console plus daily rotating files).

use std::fs;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "site_server=info,tower_http=info";

/// Days an application log file is kept by [`cleanup_old_logs`]
pub const LOG_RETENTION_DAYS: i64 = 14;

/// Initialize the console logger only
pub fn init_logger() -> anyhow::Result<()> {
    init_logger_with_file(None, false, None)
}

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Filter directive used when `RUST_LOG` is unset (defaults to [`DEFAULT_FILTER`])
/// * `json_format` - JSON console output (production) instead of pretty output
/// * `log_dir` - Optional directory for daily rotating `app-YYYY-MM-DD.log` files
///
/// # Examples
/// ```no_run
/// // Development setup (console only)
/// site_server::init_logger_with_file(Some("debug"), false, None)?;
///
/// // Production setup (console + file)
/// site_server::init_logger_with_file(None, true, Some("./data/logs"))?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger_with_file(
    level: Option<&str>,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let directive = level.unwrap_or(DEFAULT_FILTER);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    let console_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_file(false)
            .with_line_number(false)
            .boxed()
    };

    let file_layer = match log_dir {
        Some(dir) => {
            let app_log_dir = Path::new(dir).join("app");
            fs::create_dir_all(&app_log_dir)?;
            let app_log = RollingFileAppender::new(Rotation::DAILY, app_log_dir, "app");
            Some(
                fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_target(true)
                    .with_current_span(true)
                    .with_writer(std::sync::Mutex::new(app_log)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

/// Delete `app-YYYY-MM-DD.log` files older than [`LOG_RETENTION_DAYS`]
///
/// Returns the number of files removed.
pub fn cleanup_old_logs(log_dir: &Path) -> anyhow::Result<usize> {
    let cutoff = chrono::Local::now().date_naive() - chrono::Duration::days(LOG_RETENTION_DAYS);
    let app_log_dir = log_dir.join("app");
    if !app_log_dir.exists() {
        return Ok(0);
    }

    let mut removed = 0;
    for entry in fs::read_dir(app_log_dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if let Some(date_part) = name.strip_prefix("app.").or_else(|| name.strip_prefix("app-"))
            && let Ok(date) = chrono::NaiveDate::parse_from_str(date_part.trim_end_matches(".log"), "%Y-%m-%d")
            && date < cutoff
        {
            fs::remove_file(&path)?;
            tracing::info!(file = %name, "Deleted old log file");
            removed += 1;
        }
    }
    Ok(removed)
}
