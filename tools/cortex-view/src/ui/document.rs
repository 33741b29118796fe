//! Document layout.
//!
//! The whole document is laid out at a given width into an off-screen
//! buffer exactly as tall as its content. The viewport then shows a window
//! of that buffer, which is how the terminal gets a scroll container.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::domain::{Boundary, Document, Section, HEADER_ICON, HEADER_SUBTITLE, HEADER_TITLE};

use super::card;

/// Blank rows between sections.
pub const SECTION_GAP: u16 = 1;
/// Columns left free on each side of a card.
pub const CARD_MARGIN: u16 = 1;

/// A section and the area it occupies in the document buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement<'a> {
    pub section: Section<'a>,
    pub area: Rect,
}

/// Place every section top to bottom at the given width.
pub fn layout_document<'a>(doc: &Document<'a>, width: u16) -> Vec<Placement<'a>> {
    let mut placements = Vec::with_capacity(doc.sections().len());
    let mut y = 0u16;

    for (index, &section) in doc.sections().iter().enumerate() {
        if index > 0 {
            y = y.saturating_add(SECTION_GAP);
        }

        let (x, section_width) = match section {
            Section::Card(_) => (CARD_MARGIN, width.saturating_sub(2 * CARD_MARGIN)),
            _ => (0, width),
        };
        let height = section_height(&section, section_width);

        placements.push(Placement {
            section,
            area: Rect::new(x, y, section_width, height),
        });
        y = y.saturating_add(height);
    }

    placements
}

/// Total rows the document needs at the given width.
pub fn document_height(doc: &Document<'_>, width: u16) -> u16 {
    layout_document(doc, width)
        .last()
        .map(|p| p.area.bottom())
        .unwrap_or(0)
}

/// Render the full document into a buffer `width` columns wide.
pub fn render_document(doc: &Document<'_>, width: u16) -> Buffer {
    if width == 0 {
        return Buffer::empty(Rect::default());
    }

    let placements = layout_document(doc, width);
    let height = placements.last().map(|p| p.area.bottom()).unwrap_or(0);
    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));

    for placement in &placements {
        render_section(&placement.section, placement.area, &mut buf);
    }

    buf
}

fn section_height(section: &Section<'_>, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    match section {
        // Title block plus the rule under it
        Section::Header => header().line_count(width) as u16 + 1,
        Section::Caption(boundary) => caption(*boundary).line_count(width) as u16,
        Section::Card(zone) => card::card_height(zone, width),
    }
}

fn render_section(section: &Section<'_>, area: Rect, buf: &mut Buffer) {
    match section {
        Section::Header => {
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray))
                .render(area, buf);
            let text_area = Rect {
                height: area.height.saturating_sub(1),
                ..area
            };
            header().render(text_area, buf);
        }
        Section::Caption(boundary) => caption(*boundary).render(area, buf),
        Section::Card(zone) => card::render_card(zone, area, buf),
    }
}

fn header() -> Paragraph<'static> {
    let title = Line::from(vec![
        Span::styled(HEADER_ICON, Style::default().fg(Color::Magenta)),
        Span::raw(" "),
        Span::styled(
            HEADER_TITLE,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    let subtitle = Line::from(Span::styled(
        HEADER_SUBTITLE,
        Style::default().fg(Color::DarkGray),
    ));

    Paragraph::new(vec![title, subtitle])
        .centered()
        .wrap(Wrap { trim: true })
}

fn caption(boundary: Boundary) -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        boundary.label(),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )))
    .centered()
    .wrap(Wrap { trim: true })
}
