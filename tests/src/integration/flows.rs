//! # Integration Test Flows
//!
//! The catalog, the composed document, the terminal rendering and the
//! printed output must all agree on the same six zones in the same order.

#[cfg(test)]
mod tests {
    use cortex_catalog::ZoneCatalog;
    use cortex_view::ui::{self, card, document};
    use cortex_view::{output, App, Boundary, Document, PrintFormat, Section};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const EXPECTED_CODES: [&str; 6] = ["MZ", "CP", "SP", "IZ", "SVZ", "VZ"];

    fn draw(app: &mut App, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| ui::render(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
            .collect()
    }

    fn first_row_with(buf: &Buffer, needle: &str) -> Option<u16> {
        (0..buf.area.height).find(|&y| row(buf, y).contains(needle))
    }

    // =============================================================================
    // FLOWS
    // =============================================================================

    #[test]
    fn test_screen_shows_zones_in_catalog_order() {
        let mut app = App::new(ZoneCatalog::developing_cortex());
        let buf = draw(&mut app, 90, 150);

        let pia = first_row_with(&buf, Boundary::OuterSurface.label()).unwrap();
        let ventricle = first_row_with(&buf, Boundary::Innermost.label()).unwrap();

        let name_rows: Vec<u16> = app
            .catalog()
            .iter()
            .map(|zone| first_row_with(&buf, zone.name()).unwrap())
            .collect();

        assert!(pia < name_rows[0]);
        assert!(name_rows.windows(2).all(|w| w[0] < w[1]));
        assert!(*name_rows.last().unwrap() < ventricle);
    }

    #[test]
    fn test_every_card_shows_its_record() {
        let catalog = ZoneCatalog::developing_cortex();
        let doc = Document::compose(&catalog);
        let width = 70;
        let buf = document::render_document(&doc, width);

        let mut codes = Vec::new();
        for placement in document::layout_document(&doc, width) {
            let Section::Card(zone) = placement.section else {
                continue;
            };
            let layout = card::card_layout(placement.area);

            let badge_row: String = (layout.badge.x + 1..layout.badge.right() - 1)
                .filter_map(|x| buf.cell((x, layout.badge.y + 1)).map(|c| c.symbol().to_string()))
                .collect();
            codes.push(badge_row.trim().to_string());

            let text: Vec<String> = (layout.text.y..layout.text.bottom())
                .map(|y| {
                    (layout.text.x..layout.text.right())
                        .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
                        .collect::<String>()
                        .trim()
                        .to_string()
                })
                .filter(|l| !l.is_empty())
                .collect();
            assert_eq!(text[0], zone.name());
            assert!(text.len() > 1, "{} has no description", zone.name());
        }

        assert_eq!(codes, EXPECTED_CODES);
    }

    #[test]
    fn test_captions_appear_once_each() {
        let mut app = App::new(ZoneCatalog::developing_cortex());
        let buf = draw(&mut app, 100, 150);

        for boundary in [Boundary::OuterSurface, Boundary::Innermost] {
            let hits = (0..buf.area.height)
                .filter(|&y| row(&buf, y).contains(boundary.label()))
                .count();
            assert_eq!(hits, 1, "{}", boundary.label());
        }
    }

    #[test]
    fn test_repeated_renders_are_identical() {
        let mut app = App::new(ZoneCatalog::developing_cortex());
        let first = draw(&mut app, 80, 30);
        let second = draw(&mut app, 80, 30);
        assert_eq!(first, second);

        // Fresh catalog (new ids), same screen
        let mut other = App::new(ZoneCatalog::developing_cortex());
        assert_eq!(draw(&mut other, 80, 30), first);
    }

    #[test]
    fn test_scrolling_reaches_the_ventricle() {
        let mut app = App::new(ZoneCatalog::developing_cortex());
        let top = draw(&mut app, 60, 16);
        assert!(first_row_with(&top, Boundary::Innermost.label()).is_none());

        app.scroll_to_bottom();
        let bottom = draw(&mut app, 60, 16);
        assert!(first_row_with(&bottom, Boundary::Innermost.label()).is_some());
        assert!(first_row_with(&bottom, Boundary::OuterSurface.label()).is_none());
    }

    #[test]
    fn test_text_output_matches_document() {
        let catalog = ZoneCatalog::developing_cortex();
        let mut out = Vec::new();
        output::write_catalog(PrintFormat::Text, &catalog, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let codes: Vec<&str> = text
            .lines()
            .filter_map(|l| l.strip_prefix('['))
            .filter_map(|l| l.split(']').next())
            .collect();
        assert_eq!(codes, Document::compose(&catalog).card_abbreviations());
    }

    #[test]
    fn test_json_output_matches_catalog() {
        let catalog = ZoneCatalog::developing_cortex();
        let mut out = Vec::new();
        output::write_catalog(PrintFormat::Json, &catalog, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        let zones = value.as_array().unwrap();
        assert_eq!(zones.len(), catalog.len());
        for (json, zone) in zones.iter().zip(catalog.iter()) {
            assert_eq!(json["name"], zone.name());
            assert_eq!(json["description"], zone.description());
            assert_eq!(json["id"], zone.id().to_string());
        }
    }
}
