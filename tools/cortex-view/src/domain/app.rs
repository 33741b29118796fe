//! Application state management.

use cortex_catalog::ZoneCatalog;

use super::{Document, ScrollState};

/// Application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Reading the document.
    #[default]
    Viewing,
    /// Help overlay.
    Help,
    /// Quitting.
    Quit,
}

/// Main application model.
///
/// The catalog never changes; only the viewport and overlay state do.
#[derive(Debug)]
pub struct App {
    /// Current application state/view.
    pub state: AppState,
    /// Viewport position over the rendered document.
    pub scroll: ScrollState,
    catalog: ZoneCatalog,
}

impl App {
    /// Create a new application instance over a catalog.
    pub fn new(catalog: ZoneCatalog) -> Self {
        Self {
            state: AppState::Viewing,
            scroll: ScrollState::default(),
            catalog,
        }
    }

    pub fn catalog(&self) -> &ZoneCatalog {
        &self.catalog
    }

    /// Compose the document shown by the root view.
    pub fn document(&self) -> Document<'_> {
        Document::compose(&self.catalog)
    }

    /// Handle a character key.
    pub fn handle_key(&mut self, key: char) {
        match self.state {
            AppState::Viewing => self.handle_viewing_key(key),
            AppState::Help => {
                // Any key closes help
                self.state = AppState::Viewing;
            }
            AppState::Quit => {}
        }
    }

    fn handle_viewing_key(&mut self, key: char) {
        match key {
            'q' | 'Q' => self.state = AppState::Quit,
            '?' => self.state = AppState::Help,
            'j' => self.scroll_down(),
            'k' => self.scroll_up(),
            'g' => self.scroll.to_top(),
            'G' => self.scroll.to_bottom(),
            ' ' => self.scroll.page_down(),
            _ => {}
        }
    }

    /// Handle Esc: close help, otherwise quit.
    pub fn handle_escape(&mut self) {
        self.state = match self.state {
            AppState::Help => AppState::Viewing,
            _ => AppState::Quit,
        };
    }

    /// Scroll one row up.
    pub fn scroll_up(&mut self) {
        if self.state == AppState::Viewing {
            self.scroll.scroll_by(-1);
        }
    }

    /// Scroll one row down.
    pub fn scroll_down(&mut self) {
        if self.state == AppState::Viewing {
            self.scroll.scroll_by(1);
        }
    }

    pub fn page_up(&mut self) {
        if self.state == AppState::Viewing {
            self.scroll.page_up();
        }
    }

    pub fn page_down(&mut self) {
        if self.state == AppState::Viewing {
            self.scroll.page_down();
        }
    }

    pub fn scroll_to_top(&mut self) {
        if self.state == AppState::Viewing {
            self.scroll.to_top();
        }
    }

    pub fn scroll_to_bottom(&mut self) {
        if self.state == AppState::Viewing {
            self.scroll.to_bottom();
        }
    }

    /// Check if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.state == AppState::Quit
    }
}
