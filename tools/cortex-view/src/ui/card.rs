//! Zone card renderer.
//!
//! ```text
//! ╭──────────────────────────────────────────────╮
//! │ Subventricular Zone                ╭──────╮  │
//! │ Secondary proliferative layer of   │ SVZ  │  │
//! │ intermediate progenitors and outer ╰──────╯  │
//! │ radial glia that multiplies neuron output.   │
//! ╰──────────────────────────────────────────────╯
//! ```

use cortex_catalog::{ColorTag, ZoneRecord, MAX_ABBREVIATION_LEN};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap},
};

/// Badge width: border plus a gradient strip one cell wider than the longest
/// abbreviation on each side.
pub const BADGE_WIDTH: u16 = MAX_ABBREVIATION_LEN as u16 + 4;
/// Badge height: border plus one row.
pub const BADGE_HEIGHT: u16 = 3;

/// Columns between the text block and the badge.
const BADGE_GAP: u16 = 1;
/// Border plus one column of padding on each side.
const FRAME_WIDTH: u16 = 4;
/// Top and bottom border.
const FRAME_HEIGHT: u16 = 2;

const BACKDROP: (u8, u8, u8) = (16, 16, 20);
const HIGHLIGHT: (u8, u8, u8) = (255, 255, 255);

/// Areas inside a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLayout {
    /// Wrapped name, then wrapped description.
    pub text: Rect,
    /// Badge, right-aligned and vertically centered.
    pub badge: Rect,
}

/// Convert a tag tone into a terminal color.
pub fn tone(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Card fill: the zone color sunk into the backdrop.
pub fn fill_color(tag: ColorTag) -> Color {
    tone(tag.mix(BACKDROP, 0.82))
}

/// Width of the text block for a card of the given width.
pub fn text_width(card_width: u16) -> u16 {
    card_width
        .saturating_sub(FRAME_WIDTH + BADGE_GAP + BADGE_WIDTH)
        .max(1)
}

/// Height a card needs at the given width so its description is never cut.
pub fn card_height(zone: &ZoneRecord, card_width: u16) -> u16 {
    let width = text_width(card_width);
    let text_lines = heading(zone).line_count(width) + description(zone).line_count(width);
    (text_lines as u16).max(BADGE_HEIGHT) + FRAME_HEIGHT
}

/// Split a card area into its text block and badge.
pub fn card_layout(area: Rect) -> CardLayout {
    let inner = Rect {
        x: area.x + FRAME_WIDTH / 2,
        y: area.y + FRAME_HEIGHT / 2,
        width: area.width.saturating_sub(FRAME_WIDTH),
        height: area.height.saturating_sub(FRAME_HEIGHT),
    };

    let text = Rect {
        width: text_width(area.width).min(inner.width),
        ..inner
    };

    let badge_width = BADGE_WIDTH.min(inner.width);
    let badge_height = BADGE_HEIGHT.min(inner.height);
    let badge = Rect {
        x: inner.right().saturating_sub(badge_width),
        y: inner.y + inner.height.saturating_sub(badge_height) / 2,
        width: badge_width,
        height: badge_height,
    };

    CardLayout { text, badge }
}

/// Render one zone card into `area`.
pub fn render_card(zone: &ZoneRecord, area: Rect, buf: &mut Buffer) {
    let color = zone.color();

    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(tone(color.rgb())))
        .style(Style::default().bg(fill_color(color)))
        .padding(Padding::horizontal(1))
        .render(area, buf);

    let layout = card_layout(area);
    render_text(zone, layout.text, buf);
    render_badge(zone, layout.badge, buf);
}

fn heading(zone: &ZoneRecord) -> Paragraph<'static> {
    Paragraph::new(zone.name())
        .style(
            Style::default()
                .fg(tone(zone.color().mix(HIGHLIGHT, 0.45)))
                .add_modifier(Modifier::BOLD),
        )
        .wrap(Wrap { trim: true })
}

fn description(zone: &ZoneRecord) -> Paragraph<'static> {
    Paragraph::new(zone.description())
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true })
}

fn render_text(zone: &ZoneRecord, area: Rect, buf: &mut Buffer) {
    if area.is_empty() {
        return;
    }

    let heading = heading(zone);
    let heading_rows = (heading.line_count(area.width) as u16).min(area.height);
    let heading_area = Rect {
        height: heading_rows,
        ..area
    };
    let description_area = Rect {
        y: area.y + heading_rows,
        height: area.height - heading_rows,
        ..area
    };

    heading.render(heading_area, buf);
    description(zone).render(description_area, buf);
}

/// Render the abbreviation badge: a rounded frame around a strip whose
/// background fades from a light tint to the zone color.
fn render_badge(zone: &ZoneRecord, area: Rect, buf: &mut Buffer) {
    let color = zone.color();
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(tone(color.rgb())));
    let strip = block.inner(area);
    block.render(area, buf);

    if strip.is_empty() {
        return;
    }

    let steps = strip.width.saturating_sub(1).max(1) as f32;
    for dx in 0..strip.width {
        let shade = tone(color.mix(HIGHLIGHT, 0.5 * (1.0 - dx as f32 / steps)));
        for dy in 0..strip.height {
            if let Some(cell) = buf.cell_mut((strip.x + dx, strip.y + dy)) {
                cell.set_style(Style::default().bg(shade));
            }
        }
    }

    let label = Line::from(Span::styled(
        zone.abbreviation(),
        Style::default()
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    ))
    .centered();
    let label_row = Rect {
        y: strip.y + strip.height / 2,
        height: 1,
        ..strip
    };
    label.render(label_row, buf);
}
