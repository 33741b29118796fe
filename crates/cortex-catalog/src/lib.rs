//! # Cortex Catalog Crate
//!
//! The fixed, ordered catalog of the six zones of the developing cerebral
//! wall, from the pial surface down to the ventricle.
//!
//! ## Design Principles
//!
//! - **Built Once**: The catalog is constructed from a compile-time table and
//!   is never mutated afterwards.
//! - **Order Is Meaning**: Records are kept in anatomical order (outermost to
//!   innermost). Nothing in this crate sorts them.
//! - **Presentation Agnostic**: Colors are exposed as symbolic tags with RGB
//!   tones; mapping them onto a terminal palette is the viewer's job.

pub mod catalog;
pub mod record;

pub use catalog::{ZoneCatalog, ZONE_COUNT};
pub use record::{ColorTag, ZoneRecord, MAX_ABBREVIATION_LEN};
