use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Row, Table, Widget},
};

use super::helpers::{centered_rect, draw_drop_shadow};

const BINDINGS: &[(&str, &[(&str, &str)])] = &[
    (
        "Search",
        &[
            (" type", "Edit the query (results follow after a short pause)"),
            (" Ctrl-u", "Clear the query"),
            (" Esc", "Clear the query, or quit when it is empty"),
        ],
    ),
    (
        "Suggestions",
        &[
            (" \u{2193} / Tab / Ctrl-n", "Next suggestion"),
            (" \u{2191} / S-Tab / Ctrl-p", "Previous suggestion"),
            (" Enter / click", "Show product details"),
        ],
    ),
    (
        "App",
        &[(" F1", "Toggle this help"), (" Ctrl-c", "Quit")],
    ),
];

pub struct HelpModal<'a> {
    pub theme: &'a Theme,
}

impl Widget for HelpModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let help_area = centered_rect(70, 60, area);
        if help_area.width == 0 || help_area.height == 0 {
            return;
        }
        draw_drop_shadow(buf, help_area, area);
        Clear.render(help_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" HELP - KEYBINDINGS ", self.theme.panel_title),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let key_style = self.theme.footer_segment_key;
        let desc_style = self.theme.list_item;
        let category_style = self.theme.panel_title;

        let mut rows = Vec::new();
        for (i, (category, entries)) in BINDINGS.iter().enumerate() {
            if i > 0 {
                rows.push(Row::new(vec![Cell::from(""), Cell::from("")]));
            }
            rows.push(Row::new(vec![
                Cell::from(Span::styled(*category, category_style)),
                Cell::from(""),
            ]));
            for (key, desc) in *entries {
                rows.push(Row::new(vec![
                    Cell::from(Span::styled(*key, key_style)),
                    Cell::from(Span::styled(*desc, desc_style)),
                ]));
            }
        }

        Table::new(rows, [Constraint::Length(26), Constraint::Min(10)])
            .block(block)
            .render(help_area, buf);
    }
}
