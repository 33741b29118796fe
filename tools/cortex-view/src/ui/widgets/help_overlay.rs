//! Help overlay widget.

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Key column followed by its description.
const KEYS: [(&str, &str); 7] = [
    ("  ↑/k      ", "Scroll up one line"),
    ("  ↓/j      ", "Scroll down one line"),
    ("  PgUp     ", "Scroll up one page"),
    ("  PgDn/Spc ", "Scroll down one page"),
    ("  Home/g   ", "Jump to the pia"),
    ("  End/G    ", "Jump to the ventricle"),
    ("  Q/Esc    ", "Quit"),
];

/// Render a centered help overlay.
pub fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    // Center a box in the middle of the screen
    let popup_area = centered_rect(60, 70, area);

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let mut help_text = vec![
        Line::from(vec![Span::styled(
            "CORTEX-VIEW HELP",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::raw(""),
        Line::from(vec![Span::styled(
            "Navigation",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::raw(""),
    ];

    help_text.extend(KEYS.iter().map(|&(key, action)| {
        Line::from(vec![
            Span::styled(key, Style::default().fg(Color::Yellow)),
            Span::raw(action),
        ])
    }));

    help_text.extend([
        Line::raw(""),
        Line::from(vec![Span::styled(
            "Zones run from the outer surface (top)",
            Style::default().fg(Color::DarkGray),
        )]),
        Line::from(vec![Span::styled(
            "to the ventricle (bottom).",
            Style::default().fg(Color::DarkGray),
        )]),
        Line::raw(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )]),
    ]);

    let paragraph = Paragraph::new(help_text).block(
        Block::default()
            .title(" Help ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(paragraph, popup_area);
}

/// Create a centered rectangle.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);

    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}
