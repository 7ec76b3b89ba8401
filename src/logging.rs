//! File logging for the demo.
//!
//! The terminal is in raw mode for the whole session, so log lines would
//! corrupt the echoed keys. Everything goes to `rawkeys.log` under the local
//! data directory, rotated daily.

use std::path::PathBuf;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

const DEFAULT_LOG_FILTER: &str = "rawkeys=info,warn";

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `filter`, which wins over the built-in default.
/// `rawkeys=trace` records every decoded chunk.
pub fn init(filter: Option<&str>) -> anyhow::Result<()> {
    let log_dir = log_dir()?;
    std::fs::create_dir_all(&log_dir)?;

    let appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "rawkeys.log");
    let filter = resolve_filter(filter)?;

    let subscriber = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter);

    tracing::subscriber::set_global_default(subscriber)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), log_dir = %log_dir.display(), "rawkeys starting up");

    Ok(())
}

fn resolve_filter(configured: Option<&str>) -> anyhow::Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(env_filter) => Ok(env_filter),
        Err(_) => Ok(EnvFilter::try_new(
            configured.unwrap_or(DEFAULT_LOG_FILTER),
        )?),
    }
}

fn log_dir() -> anyhow::Result<PathBuf> {
    let base = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))?;
    Ok(base.join("rawkeys").join("logs"))
}

/// Directory holding the log files, for error messages.
pub fn log_directory() -> Option<PathBuf> {
    log_dir().ok()
}

pub fn shutdown() {
    tracing::info!("rawkeys shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_log_directory_under_rawkeys() {
        let dir = log_directory().unwrap();
        assert!(dir.ends_with("rawkeys/logs"));
    }

    #[test]
    #[serial]
    fn test_configured_filter_used_without_rust_log() {
        std::env::remove_var("RUST_LOG");
        let filter = resolve_filter(Some("rawkeys=trace")).unwrap();
        assert_eq!(filter.to_string().to_lowercase(), "rawkeys=trace");
    }

    #[test]
    #[serial]
    fn test_malformed_filter_rejected() {
        std::env::remove_var("RUST_LOG");
        assert!(resolve_filter(Some("rawkeys=notalevel")).is_err());
    }

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }
}
