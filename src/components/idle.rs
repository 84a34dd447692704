use crate::app::state::AppState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Body placeholder shown when there is neither a list nor a product.
pub struct IdleHint<'a> {
    pub app_state: &'a AppState<'a>,
}

impl Widget for IdleHint<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.app_state;
        let theme = &state.theme;
        let term = state.trimmed_query();

        let message = if term.is_empty() {
            Line::from(vec![
                Span::styled("Start typing", theme.footer_segment_key),
                Span::styled(" to search the catalog", theme.dimmed),
            ])
        } else if state.loading_product.is_some() {
            Line::from(Span::styled(
                format!("{} Loading product...", state.spinner),
                theme.dimmed,
            ))
        } else if state.search.in_flight > 0 {
            Line::from(Span::styled(
                format!("{} Searching for \"{term}\"...", state.spinner),
                theme.dimmed,
            ))
        } else if state.search.last_term.as_deref() == Some(term.as_str()) {
            Line::from(Span::styled(
                format!("No products match \"{term}\""),
                theme.dimmed,
            ))
        } else {
            Line::from("")
        };

        let y = area.y + area.height / 2;
        if area.width > 0 && y < area.y + area.height {
            Paragraph::new(message)
                .alignment(Alignment::Center)
                .render(Rect::new(area.x, y, area.width, 1), buf);
        }
    }
}
