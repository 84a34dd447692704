use crate::domain::models::Suggestion;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, StatefulWidget},
};

pub struct SuggestionList<'a> {
    pub suggestions: &'a [Suggestion],
    pub theme: &'a Theme,
}

impl StatefulWidget for SuggestionList<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ListState) {
        let items: Vec<ListItem> = self
            .suggestions
            .iter()
            .map(|s| {
                ListItem::new(Line::from(vec![
                    Span::styled(s.name.as_str(), self.theme.list_item),
                    Span::styled(format!("  #{}", s.id), self.theme.dimmed),
                ]))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(self.theme.list_selected)
            .highlight_symbol("> ");

        StatefulWidget::render(list, area, buf, state);
    }
}
