use crate::app::state::AppState;
use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Header<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
    pub terminal_width: u16,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (status_text, status_style) = if self.state.loading_product.is_some() {
            (format!(" {} loading product ", self.state.spinner), self.theme.status_busy)
        } else if self.state.search.in_flight > 0 {
            (format!(" {} searching ", self.state.spinner), self.theme.status_busy)
        } else {
            (" ready ".to_string(), self.theme.status_ready)
        };

        // Segment background colors for separator transitions
        let logo_bg = self.theme.header_logo.bg.unwrap_or(Color::Reset);
        let url_bg = self.theme.header_url.bg.unwrap_or(Color::Reset);
        let status_bg = status_style.bg.unwrap_or(Color::Reset);
        let base_bg = self.theme.header.bg.unwrap_or(Color::Reset);

        let spans = vec![
            Span::styled(format!(" {} SHOPSEARCH ", glyphs::SEARCH), self.theme.header_logo),
            Span::styled(glyphs::SEP_RIGHT, Style::default().fg(logo_bg).bg(url_bg)),
            Span::styled(format!(" {} ", self.state.api_url), self.theme.header_url),
            Span::styled(glyphs::SEP_RIGHT, Style::default().fg(url_bg).bg(status_bg)),
            Span::styled(status_text, status_style),
            Span::styled(glyphs::SEP_RIGHT, Style::default().fg(status_bg).bg(base_bg)),
            // Fill rest of line
            Span::styled(" ".repeat(self.terminal_width as usize), self.theme.header),
        ];

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}
