//! Vertical scroll position of the document viewport.

/// Scroll offset clamped to the rendered content.
///
/// The extent is refreshed on every draw, since the content height depends
/// on the terminal width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    offset: u16,
    content_height: u16,
    viewport_height: u16,
}

impl ScrollState {
    /// First visible row of the content.
    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn content_height(&self) -> u16 {
        self.content_height
    }

    pub fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    /// Largest offset that still fills the viewport.
    pub fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Whether the content is taller than the viewport.
    pub fn is_scrollable(&self) -> bool {
        self.max_offset() > 0
    }

    /// Update the content and viewport heights, re-clamping the offset.
    pub fn set_extent(&mut self, content_height: u16, viewport_height: u16) {
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Move by `delta` rows (negative scrolls up).
    pub fn scroll_by(&mut self, delta: i32) {
        let target = i32::from(self.offset) + delta;
        self.offset = target.clamp(0, i32::from(self.max_offset())) as u16;
    }

    pub fn page_down(&mut self) {
        self.scroll_by(i32::from(self.viewport_height.max(1)));
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-i32::from(self.viewport_height.max(1)));
    }

    pub fn to_top(&mut self) {
        self.offset = 0;
    }

    pub fn to_bottom(&mut self) {
        self.offset = self.max_offset();
    }
}
