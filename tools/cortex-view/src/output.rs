//! Non-interactive output: the same document as plain text, or the catalog
//! as JSON.

use std::io::Write;

use cortex_catalog::ZoneCatalog;

use crate::config::PrintFormat;
use crate::domain::{Document, Section, HEADER_ICON, HEADER_SUBTITLE, HEADER_TITLE};
use crate::error::ViewError;

/// Write the catalog in the requested format.
pub fn write_catalog<W: Write>(
    format: PrintFormat,
    catalog: &ZoneCatalog,
    out: &mut W,
) -> Result<(), ViewError> {
    match format {
        PrintFormat::Text => write_text(&Document::compose(catalog), out),
        PrintFormat::Json => write_json(catalog, out),
    }
}

/// Write a document as plain text, one line per section.
pub fn write_text<W: Write>(doc: &Document<'_>, out: &mut W) -> Result<(), ViewError> {
    for section in doc.sections() {
        match section {
            Section::Header => {
                writeln!(out, "{} {}", HEADER_ICON, HEADER_TITLE)?;
                writeln!(out, "{}", HEADER_SUBTITLE)?;
                writeln!(out)?;
            }
            Section::Caption(boundary) => writeln!(out, "{}", boundary.label())?,
            Section::Card(zone) => writeln!(
                out,
                "[{}] {}: {}",
                zone.abbreviation(),
                zone.name(),
                zone.description()
            )?,
        }
    }
    Ok(())
}

/// Write the catalog as a pretty-printed JSON array.
pub fn write_json<W: Write>(catalog: &ZoneCatalog, out: &mut W) -> Result<(), ViewError> {
    serde_json::to_writer_pretty(&mut *out, catalog)?;
    writeln!(out)?;
    Ok(())
}
