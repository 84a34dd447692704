use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppState, AppTextArea},
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::ChooseSuggestion(idx) => {
            let Some(suggestion) = state.search.suggestions.get(*idx).cloned() else {
                return UpdateResult::Handled(None);
            };
            state.search.list_state.select(Some(*idx));
            // Programmatic update: no search is scheduled for the chosen name
            state.input = AppTextArea::with_text(&suggestion.name);
            state.loading_product = Some(suggestion.id.clone());
            UpdateResult::Handled(Some(Command::LoadProduct(suggestion.id)))
        }
        Action::ProductLoaded(detail) => {
            if state.loading_product.as_ref() != Some(&detail.id) {
                tracing::debug!(id = %detail.id, "product arrived after the query changed, dropping");
                return UpdateResult::Handled(None);
            }
            state.loading_product = None;
            state.selected_product = Some((**detail).clone());
            state.search.clear();
            UpdateResult::Handled(None)
        }
        Action::ProductFailed { id, error } => {
            if state.loading_product.as_ref() == Some(id) {
                state.loading_product = None;
            }
            tracing::warn!(%id, %error, "failed to load product details");
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}
