//! Tracing subscriber setup.
//!
//! The interactive viewer owns the terminal, so it only logs to a file.
//! Print mode logs to stderr and leaves stdout to the output.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{OutputMode, ViewConfig};
use crate::error::ViewError;

/// Where log lines go for a given configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink<'a> {
    File(&'a Path),
    Stderr,
    Disabled,
}

/// Pick the log sink for a configuration.
pub fn log_sink(config: &ViewConfig) -> LogSink<'_> {
    match (&config.log_file, config.mode) {
        (Some(path), _) => LogSink::File(path),
        (None, OutputMode::Print(_)) => LogSink::Stderr,
        (None, OutputMode::Interactive) => LogSink::Disabled,
    }
}

/// Install the global subscriber.
pub fn init_logging(config: &ViewConfig) -> Result<(), ViewError> {
    let sink = log_sink(config);
    if sink == LogSink::Disabled {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| ViewError::Logging(e.to_string()))?;

    match sink {
        LogSink::File(path) => {
            let file = open_log_file(path)?;
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(Mutex::new(file));

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()
                .map_err(|e| ViewError::Logging(e.to_string()))?;
        }
        LogSink::Stderr => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()
                .map_err(|e| ViewError::Logging(e.to_string()))?;
        }
        LogSink::Disabled => {}
    }

    tracing::debug!(log_level = %config.log_level, "logging initialized");
    Ok(())
}

fn open_log_file(path: &Path) -> Result<File, ViewError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| ViewError::LogFile {
            path: path.to_path_buf(),
            source,
        })
}
