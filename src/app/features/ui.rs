use crate::app::{
    action::{Action, UpdateResult},
    state::{AppMode, AppState},
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::ToggleHelp => {
            state.mode = if state.mode == AppMode::Help {
                AppMode::Normal
            } else {
                AppMode::Help
            };
            UpdateResult::Handled(None)
        }
        Action::CancelMode => {
            if state.mode != AppMode::Normal {
                state.mode = AppMode::Normal;
                UpdateResult::Handled(None)
            } else if !state.query().is_empty() || state.selected_product.is_some() {
                super::search::update(state, &Action::ClearQuery)
            } else {
                state.should_quit = true;
                UpdateResult::Handled(None)
            }
        }
        Action::Quit => {
            state.should_quit = true;
            UpdateResult::Handled(None)
        }
        Action::Tick => {
            state.advance_spinner();
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}
