//! Command-line arguments and the configuration derived from them.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Cortex-View: zones of the developing cortex
#[derive(Parser, Debug)]
#[command(name = "cortex-view")]
#[command(author, version, about = "Scrollable terminal cards for the zones of the developing cortex")]
pub struct Args {
    /// Print the catalog to stdout and exit instead of opening the viewer
    #[arg(long, value_enum)]
    pub print: Option<PrintFormat>,

    /// Write logs to this file (the interactive viewer logs nowhere otherwise)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter directive; RUST_LOG takes precedence
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Non-interactive output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PrintFormat {
    /// Header, captions and one line per zone.
    Text,
    /// The catalog as a pretty-printed JSON array.
    Json,
}

/// How the program presents the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Full-screen scrollable viewer.
    #[default]
    Interactive,
    /// Write to stdout and exit.
    Print(PrintFormat),
}

/// Resolved viewer configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewConfig {
    pub mode: OutputMode,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            mode: OutputMode::Interactive,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl From<Args> for ViewConfig {
    fn from(args: Args) -> Self {
        let mode = match args.print {
            Some(format) => OutputMode::Print(format),
            None => OutputMode::Interactive,
        };

        Self {
            mode,
            log_file: args.log_file,
            log_level: args.log_level,
        }
    }
}
