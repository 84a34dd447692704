use crate::app::{
    action::Action,
    state::{AppMode, AppState, View},
    ui,
};
use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::{Position, Rect, Size};

/// Maps a click position to the suggestion drawn there, if any.
pub fn resolve_clicked_suggestion(
    app_state: &AppState<'_>,
    terminal_size: Size,
    column: u16,
    row: u16,
) -> Option<usize> {
    if app_state.view() != View::Suggestions {
        return None;
    }
    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
    let rows = ui::suggestion_rows_area(area);
    if !rows.contains(Position::new(column, row)) {
        return None;
    }
    let idx = app_state.search.list_state.offset() + usize::from(row - rows.y);
    (idx < app_state.search.suggestions.len()).then_some(idx)
}

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    match event {
        Event::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return None;
            }
            if let Some(action) = app_state.keymap.get_action(key, app_state.mode) {
                return Some(action);
            }
            match app_state.mode {
                AppMode::Help => None,
                AppMode::Normal => match key.code {
                    KeyCode::Enter => app_state
                        .search
                        .list_state
                        .selected()
                        .filter(|_| app_state.view() == View::Suggestions)
                        .map(Action::ChooseSuggestion),
                    _ => Some(Action::TextAreaInput(key)),
                },
            }
        }
        Event::Mouse(mouse) if app_state.mode == AppMode::Normal => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                resolve_clicked_suggestion(app_state, terminal_size, mouse.column, mouse.row)
                    .map(Action::ChooseSuggestion)
            }
            MouseEventKind::ScrollDown if app_state.view() == View::Suggestions => {
                Some(Action::SelectNext)
            }
            MouseEventKind::ScrollUp if app_state.view() == View::Suggestions => {
                Some(Action::SelectPrev)
            }
            _ => None,
        },
        Event::Resize(w, h) => Some(Action::Resize(w, h)),
        _ => None,
    }
}
