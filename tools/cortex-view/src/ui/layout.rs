//! Main layout orchestration.
//!
//! Renders the overall screen structure:
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  DOCUMENT VIEWPORT (window into the rendered document)         ▲│
//! │  ...                                                           █│
//! │  ...                                                           ▼│
//! ├─────────────────────────────────────────────────────────────────┤
//! │  [↑↓] Scroll   [PgUp/PgDn] Page   [Home/End] Jump   [?] Help    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::domain::{App, AppState};

use super::{document, widgets};

/// Rows taken by the footer.
const FOOTER_HEIGHT: u16 = 3;
/// Columns reserved for the scrollbar.
const SCROLLBAR_WIDTH: u16 = 1;

/// Split the screen into the document viewport and the footer.
fn split(area: Rect) -> [Rect; 2] {
    Layout::vertical([Constraint::Min(1), Constraint::Length(FOOTER_HEIGHT)]).areas(area)
}

/// Render the entire UI.
///
/// Refreshes `app.scroll` with the current content and viewport heights, so
/// the offset always stays within the document.
pub fn render(frame: &mut Frame, app: &mut App) {
    let [body, footer] = split(frame.area());

    render_body(frame, body, app);
    render_footer(frame, footer, app);

    // Render help overlay if active
    if app.state == AppState::Help {
        widgets::render_help_overlay(frame);
    }
}

/// Render the visible window of the document plus the scrollbar.
fn render_body(frame: &mut Frame, area: Rect, app: &mut App) {
    let content_area = Rect {
        width: area.width.saturating_sub(SCROLLBAR_WIDTH),
        ..area
    };

    let rendered = document::render_document(&app.document(), content_area.width);
    app.scroll.set_extent(rendered.area.height, content_area.height);

    blit(&rendered, app.scroll.offset(), content_area, frame.buffer_mut());

    if app.scroll.is_scrollable() {
        let mut state = ScrollbarState::new(app.scroll.max_offset() as usize)
            .position(app.scroll.offset() as usize)
            .viewport_content_length(content_area.height as usize);
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("▲"))
            .end_symbol(Some("▼"));
        frame.render_stateful_widget(scrollbar, area, &mut state);
    }
}

/// Copy rows `offset..offset + area.height` of `source` into `area`.
fn blit(source: &Buffer, offset: u16, area: Rect, target: &mut Buffer) {
    for dy in 0..area.height {
        let Some(sy) = offset.checked_add(dy) else {
            break;
        };
        for dx in 0..area.width {
            let (Some(cell), Some(slot)) = (
                source.cell((dx, sy)),
                target.cell_mut((area.x + dx, area.y + dy)),
            ) else {
                continue;
            };
            *slot = cell.clone();
        }
    }
}

/// Render the footer with keyboard shortcuts and scroll position.
fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let mut keybinds = vec![
        Span::styled("[↑↓]", Style::default().fg(Color::Yellow)),
        Span::raw(" Scroll  "),
        Span::styled("[PgUp/PgDn]", Style::default().fg(Color::Yellow)),
        Span::raw(" Page  "),
        Span::styled("[Home/End]", Style::default().fg(Color::Yellow)),
        Span::raw(" Jump  "),
        Span::styled("[?]", Style::default().fg(Color::Yellow)),
        Span::raw(" Help  "),
        Span::styled("[Q]", Style::default().fg(Color::Yellow)),
        Span::raw(" Quit  "),
    ];
    keybinds.push(Span::styled(
        scroll_position(app),
        Style::default().fg(Color::DarkGray),
    ));

    let footer = Paragraph::new(Line::from(keybinds))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .centered();

    frame.render_widget(footer, area);
}

fn scroll_position(app: &App) -> String {
    let scroll = &app.scroll;
    if !scroll.is_scrollable() {
        "All".to_string()
    } else if scroll.offset() == 0 {
        "Top".to_string()
    } else if scroll.offset() == scroll.max_offset() {
        "Bot".to_string()
    } else {
        let percent = u32::from(scroll.offset()) * 100 / u32::from(scroll.max_offset());
        format!("{}%", percent)
    }
}

#[cfg(test)]
mod tests {
    use cortex_catalog::ZoneCatalog;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::domain::{Boundary, Section};

    fn draw(app: &mut App, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn row(buf: &Buffer, y: u16, x: u16, width: u16) -> String {
        (x..x + width)
            .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
            .collect()
    }

    fn lines(buf: &Buffer) -> Vec<String> {
        (0..buf.area.height)
            .map(|y| row(buf, y, 0, buf.area.width))
            .collect()
    }

    #[test]
    fn test_full_document_fits_tall_terminal() {
        let mut app = App::new(ZoneCatalog::developing_cortex());
        let buf = draw(&mut app, 80, 120);
        let text = lines(&buf);

        for boundary in [Boundary::OuterSurface, Boundary::Innermost] {
            let hits = text.iter().filter(|l| l.contains(boundary.label())).count();
            assert_eq!(hits, 1, "{}", boundary.label());
        }
        assert!(!app.scroll.is_scrollable());
        assert!(text.iter().any(|l| l.contains("All")));
    }

    #[test]
    fn test_badges_read_top_to_bottom() {
        let mut app = App::new(ZoneCatalog::developing_cortex());
        let buf = draw(&mut app, 80, 120);

        let doc = app.document();
        let badges: Vec<String> = document::layout_document(&doc, 79)
            .into_iter()
            .filter(|p| matches!(p.section, Section::Card(_)))
            .map(|p| {
                let badge = crate::ui::card::card_layout(p.area).badge;
                row(&buf, badge.y + 1, badge.x + 1, badge.width - 2)
                    .trim()
                    .to_string()
            })
            .collect();

        assert_eq!(badges, ["MZ", "CP", "SP", "IZ", "SVZ", "VZ"]);
    }

    #[test]
    fn test_redraw_is_identical() {
        let mut app = App::new(ZoneCatalog::developing_cortex());
        let first = draw(&mut app, 80, 40);
        let second = draw(&mut app, 80, 40);
        assert_eq!(first, second);
    }

    #[test]
    fn test_scrolling_moves_the_window() {
        let mut app = App::new(ZoneCatalog::developing_cortex());
        draw(&mut app, 80, 20);
        assert!(app.scroll.is_scrollable());

        for _ in 0..5 {
            app.scroll_down();
        }
        let buf = draw(&mut app, 80, 20);

        let doc = document::render_document(&app.document(), 79);
        for y in 0..17 {
            let expected: String = (0..79)
                .filter_map(|x| doc.cell((x, y + 5)).map(|c| c.symbol().to_string()))
                .collect();
            assert_eq!(row(&buf, y, 0, 79), expected, "row {}", y);
        }
    }

    #[test]
    fn test_offset_is_clamped_after_resize() {
        let mut app = App::new(ZoneCatalog::developing_cortex());
        draw(&mut app, 80, 20);
        app.scroll_to_bottom();
        let deep = app.scroll.offset();

        draw(&mut app, 80, 60);
        assert!(app.scroll.offset() < deep);
        assert_eq!(app.scroll.offset(), app.scroll.max_offset());
    }

    #[test]
    fn test_help_overlay_is_drawn() {
        let mut app = App::new(ZoneCatalog::developing_cortex());
        app.handle_key('?');
        let text = lines(&draw(&mut app, 80, 40));
        assert!(text.iter().any(|l| l.contains("CORTEX-VIEW HELP")));
    }

    #[test]
    fn test_split_leaves_room_for_footer() {
        let [body, footer] = split(Rect::new(0, 0, 80, 24));
        assert_eq!(body, Rect::new(0, 0, 80, 21));
        assert_eq!(footer.height, FOOTER_HEIGHT);
    }
}
