//! Logging initialization
//!
//! Console output is always on (pretty or JSON); a rolling file sink can be
//! added through `logging.file_enabled`. `RUST_LOG` takes precedence over
//! `logging.level` when set.

use crate::config::LoggingConfig;
use anyhow::Context;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Keeps the non-blocking file writer flushing until dropped.
#[must_use = "dropping the guard stops file logging"]
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<LoggingGuard> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .with_context(|| format!("Invalid log level '{}'", config.level))?;

    let console_layer = if config.json {
        fmt::layer().json().with_target(true).boxed()
    } else {
        fmt::layer().with_target(true).boxed()
    };

    let (file_layer, file_guard) = if config.file_enabled {
        let appender = RollingFileAppender::new(
            rotation(&config.file_rotation)?,
            &config.file_directory,
            &config.file_prefix,
        );
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = fmt::layer()
            .json()
            .with_ansi(false)
            .with_writer(writer)
            .boxed();
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install global tracing subscriber")?;

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

fn rotation(name: &str) -> anyhow::Result<Rotation> {
    match name {
        "minutely" => Ok(Rotation::MINUTELY),
        "hourly" => Ok(Rotation::HOURLY),
        "daily" => Ok(Rotation::DAILY),
        "never" => Ok(Rotation::NEVER),
        other => anyhow::bail!("Unknown log rotation '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LOG_ROTATIONS;

    #[test]
    fn every_accepted_rotation_maps() {
        for name in LOG_ROTATIONS {
            assert!(rotation(name).is_ok(), "rotation '{name}' should map");
        }
        assert!(rotation("weekly").is_err());
    }
}
