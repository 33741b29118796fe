//! Cortex-View: zones of the developing cortex in the terminal.
//!
//! A single scrollable document: a header, the pial boundary caption, one
//! card per zone in anatomical order, and the ventricular boundary caption.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              ◉ Cortical Development Zones                   │
//! │     Layers of the embryonic cerebral wall, pia to ventricle │
//! │─────────────────────────────────────────────────────────────│
//! │                 Pia Mater (Outer Surface)                  ▲│
//! │ ╭─────────────────────────────────────────────────────────╮█│
//! │ │ Marginal Zone                                ╭──────╮  │█│
//! │ │ Cell-sparse outermost layer beneath the pia, │  MZ  │  │ │
//! │ ╰─────────────────────────────────────────────────────────╯ │
//! │  ...                                                       ▼│
//! ├─────────────────────────────────────────────────────────────┤
//! │  [↑↓] Scroll  [PgUp/PgDn] Page  [Home/End] Jump  [?] Help   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - `domain`: the document model composed from the catalog, plus the
//!   viewer state (scroll position, help overlay).
//! - `ui`: ratatui rendering of the document and the viewport around it.
//! - `output`: non-interactive text and JSON output.

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod output;
pub mod ui;

pub use config::{Args, OutputMode, PrintFormat, ViewConfig};
pub use domain::{App, AppState, Boundary, Document, ScrollState, Section};
pub use error::ViewError;
