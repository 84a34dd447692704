use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use std::ops::{Deref, DerefMut};
use tui_textarea::{CursorMove, TextArea};

pub const PLACEHOLDER: &str = "Search products...";

/// Single-line search box.
pub struct AppTextArea<'a>(pub TextArea<'a>);

impl AppTextArea<'_> {
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        let mut area = TextArea::new(vec![text.to_string()]);
        area.set_placeholder_text(PLACEHOLDER);
        area.set_cursor_line_style(Style::default());
        area.move_cursor(CursorMove::End);
        Self(area)
    }

    /// The box's contents as one line.
    #[must_use]
    pub fn text(&self) -> String {
        self.0.lines().join("")
    }

    /// Folds any inserted line break back into a single line.
    pub fn flatten(&mut self) {
        if self.0.lines().len() > 1 {
            let joined = self.text();
            *self = Self::with_text(&joined);
        }
    }
}

impl Default for AppTextArea<'_> {
    fn default() -> Self {
        Self::with_text("")
    }
}

impl Clone for AppTextArea<'_> {
    fn clone(&self) -> Self {
        let mut area = Self::with_text(&self.text());
        let (_, col) = self.0.cursor();
        area.move_cursor(CursorMove::Jump(0, col as u16));
        area
    }
}

impl std::fmt::Debug for AppTextArea<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppTextArea")
            .field("lines", &self.0.lines())
            .field("cursor", &self.0.cursor())
            .finish()
    }
}

impl PartialEq for AppTextArea<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.lines() == other.0.lines() && self.0.cursor() == other.0.cursor()
    }
}

impl<'a> Deref for AppTextArea<'a> {
    type Target = TextArea<'a>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for AppTextArea<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Widget for &AppTextArea<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self.0, area, buf);
    }
}
