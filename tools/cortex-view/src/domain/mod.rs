//! Domain models for the viewer.

mod app;
mod document;
mod scroll;

pub use app::{App, AppState};
pub use document::{Boundary, Document, Section, HEADER_ICON, HEADER_SUBTITLE, HEADER_TITLE};
pub use scroll::ScrollState;
