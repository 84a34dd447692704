use crate::app::state::{AppMode, AppState, View};
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::idle::IdleHint;
use crate::components::modals::help::HelpModal;
use crate::components::product_detail::ProductDetailView;
use crate::components::suggestion_list::SuggestionList;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
    Frame,
};

pub struct AppLayout {
    pub header: Rect,
    pub search: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Search box
            Constraint::Min(0),    // Suggestions / details
            Constraint::Length(1), // Footer
        ])
        .split(area);

    AppLayout {
        header: main[0],
        search: main[1],
        body: main[2],
        footer: main[3],
    }
}

fn body_block<'a>(title: &'a str, state: &AppState) -> Block<'a> {
    Block::default()
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled(title, state.theme.panel_title),
            Span::raw(" "),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(state.theme.border)
}

/// Rows of the suggestion list, i.e. the body minus its border.
pub fn suggestion_rows_area(area: Rect) -> Rect {
    Block::default()
        .borders(Borders::ALL)
        .inner(get_layout(area).body)
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    let layout = get_layout(f.area());

    // --- Header ---
    if layout.header.height > 0 {
        let header = Header {
            state: app_state,
            theme: &app_state.theme,
            terminal_width: f.area().width,
        };
        f.render_widget(header, layout.header);
    }

    // --- Search Box ---
    if layout.search.height > 0 {
        let border_style = if app_state.mode == AppMode::Normal {
            app_state.theme.border_focus
        } else {
            app_state.theme.border
        };
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("SEARCH", app_state.theme.panel_title),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        let inner = block.inner(layout.search);
        f.render_widget(block, layout.search);
        app_state.input.set_style(app_state.theme.input);
        f.render_widget(&app_state.input, inner);
    }

    // --- Body ---
    if layout.body.width > 0 && layout.body.height > 0 {
        match app_state.view() {
            View::Suggestions => {
                let block = body_block("SUGGESTIONS", app_state);
                let inner = block.inner(layout.body);
                f.render_widget(block, layout.body);
                let list = SuggestionList {
                    suggestions: &app_state.search.suggestions,
                    theme: &app_state.theme,
                };
                f.render_stateful_widget(list, inner, &mut app_state.search.list_state);
            }
            View::Details => {
                if let Some(product) = &app_state.selected_product {
                    let block = body_block("PRODUCT", app_state);
                    let inner = block.inner(layout.body);
                    f.render_widget(block, layout.body);
                    f.render_widget(
                        ProductDetailView {
                            product,
                            currency: &app_state.currency,
                            theme: &app_state.theme,
                        },
                        inner,
                    );
                }
            }
            View::Idle => {
                f.render_widget(IdleHint { app_state }, layout.body);
            }
        }
    }

    // --- Footer ---
    if layout.footer.height > 0 {
        f.render_widget(
            Footer {
                state: app_state,
                theme: &app_state.theme,
            },
            layout.footer,
        );
    }

    // --- Overlays ---
    if app_state.mode == AppMode::Help {
        f.render_widget(
            HelpModal {
                theme: &app_state.theme,
            },
            f.area(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::AppTextArea;
    use crate::domain::models::{ProductDetail, ProductId, Suggestion};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn render(state: &mut AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, state)).unwrap();
        buffer_text(&terminal)
    }

    #[test]
    fn test_draw_suggestions() {
        let mut state = AppState::default();
        state.input = AppTextArea::with_text("sho");
        state.search.replace(vec![
            Suggestion {
                id: ProductId::from(1),
                name: "Shoe".to_string(),
            },
            Suggestion {
                id: ProductId::from(2),
                name: "Shorts".to_string(),
            },
        ]);

        let text = render(&mut state);
        assert!(text.contains("SUGGESTIONS"));
        assert!(text.contains("Shoe"));
        assert!(text.contains("Shorts"));
        assert!(!text.contains("PRODUCT"));
    }

    #[test]
    fn test_draw_details() {
        let mut state = AppState::default();
        state.input = AppTextArea::with_text("Trail shoe");
        state.selected_product = Some(ProductDetail {
            id: ProductId::from(42),
            name: "Trail shoe".to_string(),
            image: "https://img.example/42.png".to_string(),
            description: "Grippy outsole".to_string(),
            price: 89.5,
        });

        let text = render(&mut state);
        assert!(text.contains("PRODUCT"));
        assert!(text.contains("Grippy outsole"));
        assert!(text.contains("€89.50"));
        assert!(text.contains("https://img.example/42.png"));
        assert!(!text.contains("SUGGESTIONS"));
    }

    #[test]
    fn test_draw_idle_and_help() {
        let mut state = AppState::default();
        let text = render(&mut state);
        assert!(text.contains("Start typing"));

        state.mode = AppMode::Help;
        let text = render(&mut state);
        assert!(text.contains("KEYBINDINGS"));
    }

    #[test]
    fn test_draw_tiny_terminal_does_not_panic() {
        let mut state = AppState::default();
        state.input = AppTextArea::with_text("boot");
        let mut terminal = Terminal::new(TestBackend::new(3, 2)).unwrap();
        terminal.draw(|f| draw(f, &mut state)).unwrap();
    }
}
