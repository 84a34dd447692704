use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppState, AppTextArea},
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::TextAreaInput(key) => {
            let before = state.query();
            state.input.input(*key);
            state.input.flatten();
            if state.query() == before {
                // Cursor movement only
                return UpdateResult::Handled(None);
            }
            UpdateResult::Handled(Some(query_edited(state)))
        }
        Action::ClearQuery => {
            state.input = AppTextArea::default();
            UpdateResult::Handled(Some(query_edited(state)))
        }
        Action::SearchDue(term) => {
            if *term != state.trimmed_query() {
                tracing::debug!(%term, "query moved on before search fired, skipping");
                return UpdateResult::Handled(None);
            }
            state.search.in_flight += 1;
            UpdateResult::Handled(Some(Command::FetchSuggestions(term.clone())))
        }
        Action::SuggestionsLoaded { term, items } => {
            state.search.in_flight = state.search.in_flight.saturating_sub(1);
            if state.selected_product.is_some() || state.loading_product.is_some() {
                tracing::debug!(%term, "suggestions arrived after a product was chosen, dropping");
            } else if *term != state.trimmed_query() {
                tracing::debug!(%term, "stale suggestions, dropping");
            } else {
                tracing::debug!(%term, count = items.len(), "suggestions loaded");
                state.search.replace(items.clone());
                state.search.last_term = Some(term.clone());
            }
            UpdateResult::Handled(None)
        }
        Action::SearchFailed { term, error } => {
            state.search.in_flight = state.search.in_flight.saturating_sub(1);
            tracing::warn!(%term, %error, "failed to fetch suggestions");
            UpdateResult::Handled(None)
        }
        Action::SelectNext => {
            move_selection(state, 1);
            UpdateResult::Handled(None)
        }
        Action::SelectPrev => {
            move_selection(state, -1);
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Applies the consequences of the user changing the query text.
fn query_edited(state: &mut AppState) -> Command {
    state.selected_product = None;
    state.loading_product = None;

    let term = state.trimmed_query();
    if term.is_empty() {
        state.search.clear();
        Command::CancelSearch
    } else {
        Command::ScheduleSearch(term)
    }
}

fn move_selection(state: &mut AppState, delta: isize) {
    let len = state.search.suggestions.len();
    if len == 0 {
        return;
    }
    let next = match state.search.list_state.selected() {
        Some(i) => (i as isize + delta).rem_euclid(len as isize) as usize,
        None => 0,
    };
    state.search.list_state.select(Some(next));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::View;
    use crate::domain::models::{ProductDetail, ProductId, Suggestion};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn type_str(state: &mut AppState, text: &str) -> Vec<Option<Command>> {
        text.chars()
            .map(|c| {
                let key = KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
                match update(state, &Action::TextAreaInput(key)) {
                    UpdateResult::Handled(cmd) => cmd,
                    UpdateResult::NotHandled => panic!("text input not handled"),
                }
            })
            .collect()
    }

    fn suggestion(id: u64, name: &str) -> Suggestion {
        Suggestion {
            id: ProductId::from(id),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_typing_schedules_trimmed_search() {
        let mut state = AppState::default();
        let cmds = type_str(&mut state, " sho");
        assert_eq!(cmds[0], Some(Command::CancelSearch));
        assert_eq!(
            cmds.last().cloned().flatten(),
            Some(Command::ScheduleSearch("sho".to_string()))
        );
        assert_eq!(state.query(), " sho");
    }

    #[test]
    fn test_whitespace_query_clears_suggestions_without_request() {
        let mut state = AppState::default();
        state.search.replace(vec![suggestion(1, "Shoe")]);
        let cmds = type_str(&mut state, "   ");
        assert!(cmds.iter().all(|c| *c == Some(Command::CancelSearch)));
        assert!(state.search.suggestions.is_empty());
    }

    #[test]
    fn test_editing_clears_selected_product() {
        let mut state = AppState::default();
        state.selected_product = Some(ProductDetail {
            id: ProductId::from(42),
            name: "Shoe".to_string(),
            image: String::new(),
            description: String::new(),
            price: 10.0,
        });
        type_str(&mut state, "x");
        assert!(state.selected_product.is_none());
    }

    #[test]
    fn test_cursor_movement_is_not_an_edit() {
        let mut state = AppState::default();
        type_str(&mut state, "ab");
        let left = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);
        let res = update(&mut state, &Action::TextAreaInput(left));
        assert!(matches!(res, UpdateResult::Handled(None)));
    }

    #[test]
    fn test_search_due_for_current_query_fetches() {
        let mut state = AppState::default();
        type_str(&mut state, "shoe");
        let res = update(&mut state, &Action::SearchDue("shoe".to_string()));
        assert!(matches!(
            res,
            UpdateResult::Handled(Some(Command::FetchSuggestions(ref t))) if t == "shoe"
        ));
        assert_eq!(state.search.in_flight, 1);
        assert!(state.is_busy());
    }

    #[test]
    fn test_search_due_for_old_query_is_skipped() {
        let mut state = AppState::default();
        type_str(&mut state, "shoe");
        let res = update(&mut state, &Action::SearchDue("sho".to_string()));
        assert!(matches!(res, UpdateResult::Handled(None)));
        assert_eq!(state.search.in_flight, 0);
    }

    #[test]
    fn test_stale_suggestions_are_dropped() {
        let mut state = AppState::default();
        type_str(&mut state, "shoe");
        update(
            &mut state,
            &Action::SuggestionsLoaded {
                term: "sho".to_string(),
                items: vec![suggestion(1, "Shorts")],
            },
        );
        assert!(state.search.suggestions.is_empty());

        update(
            &mut state,
            &Action::SuggestionsLoaded {
                term: "shoe".to_string(),
                items: vec![suggestion(2, "Shoe"), suggestion(3, "Shoe horn")],
            },
        );
        assert_eq!(state.search.suggestions.len(), 2);
        assert_eq!(state.search.list_state.selected(), Some(0));
    }

    #[test]
    fn test_suggestions_dropped_while_product_shown() {
        let mut state = AppState::default();
        state.input = AppTextArea::with_text("Shoe");
        state.selected_product = Some(ProductDetail {
            id: ProductId::from(42),
            name: "Shoe".to_string(),
            image: String::new(),
            description: String::new(),
            price: 10.0,
        });

        let term = state.trimmed_query();
        update(
            &mut state,
            &Action::SuggestionsLoaded {
                term,
                items: vec![suggestion(42, "Shoe"), suggestion(43, "Shoe horn")],
            },
        );
        assert!(state.search.suggestions.is_empty());
        assert_eq!(state.view(), View::Details);
    }

    #[test]
    fn test_suggestions_dropped_while_product_loading() {
        let mut state = AppState::default();
        state.input = AppTextArea::with_text("Shoe");
        state.loading_product = Some(ProductId::from(42));

        let term = state.trimmed_query();
        update(
            &mut state,
            &Action::SuggestionsLoaded {
                term,
                items: vec![suggestion(42, "Shoe")],
            },
        );
        assert!(state.search.suggestions.is_empty());
        assert_ne!(state.view(), View::Suggestions);
    }

    #[test]
    fn test_failed_search_keeps_previous_suggestions() {
        let mut state = AppState::default();
        type_str(&mut state, "shoe");
        state.search.replace(vec![suggestion(2, "Shoe")]);
        state.search.in_flight = 1;

        update(
            &mut state,
            &Action::SearchFailed {
                term: "shoe".to_string(),
                error: "connection refused".to_string(),
            },
        );
        assert_eq!(state.search.suggestions.len(), 1);
        assert_eq!(state.search.in_flight, 0);
    }

    #[test]
    fn test_selection_wraps() {
        let mut state = AppState::default();
        state
            .search
            .replace(vec![suggestion(1, "a"), suggestion(2, "b"), suggestion(3, "c")]);

        update(&mut state, &Action::SelectPrev);
        assert_eq!(state.search.list_state.selected(), Some(2));
        update(&mut state, &Action::SelectNext);
        assert_eq!(state.search.list_state.selected(), Some(0));
    }

    #[test]
    fn test_clear_query() {
        let mut state = AppState::default();
        type_str(&mut state, "boot");
        state.search.replace(vec![suggestion(1, "Boot")]);
        let res = update(&mut state, &Action::ClearQuery);
        assert!(matches!(res, UpdateResult::Handled(Some(Command::CancelSearch))));
        assert_eq!(state.query(), "");
        assert!(state.search.suggestions.is_empty());
    }
}
