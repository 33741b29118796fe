//! UI module - TUI rendering components.
//!
//! The UI follows a component-based architecture:
//! - `layout.rs`: Viewport, scrollbar and footer around the document
//! - `document.rs`: Lays the whole document out into an off-screen buffer
//! - `card.rs`: One zone card with its badge
//! - `widgets/`: Reusable UI components

mod layout;

pub mod card;
pub mod document;
pub mod widgets;

pub use layout::render;
