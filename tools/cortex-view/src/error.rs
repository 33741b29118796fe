//! Errors raised by the viewer's ambient layer.
//!
//! Catalog construction and document rendering cannot fail; only the
//! terminal, logging and output plumbing can.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while running the viewer.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to open log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
    #[error("Failed to serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),
}
