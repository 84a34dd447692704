use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::AppState,
};

type FeatureUpdate = fn(&mut AppState, &Action) -> UpdateResult;

const FEATURES: [FeatureUpdate; 3] = [
    features::search::update,
    features::details::update,
    features::ui::update,
];

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    for feature in FEATURES {
        if let UpdateResult::Handled(command) = feature(state, &action) {
            return command;
        }
    }

    match action {
        Action::Resize(w, h) => {
            tracing::trace!(w, h, "terminal resized");
        }
        other => {
            tracing::trace!(?other, "unhandled action");
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::View;
    use crate::domain::models::{ProductDetail, ProductId, Suggestion};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(c: char) -> Action {
        Action::TextAreaInput(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    #[test]
    fn test_full_search_to_detail_flow() {
        let mut state = AppState::default();
        assert_eq!(state.view(), View::Idle);

        let mut last = None;
        for c in "shoe".chars() {
            last = update(&mut state, key(c));
        }
        assert_eq!(last, Some(Command::ScheduleSearch("shoe".to_string())));

        let cmd = update(&mut state, Action::SearchDue("shoe".to_string()));
        assert_eq!(cmd, Some(Command::FetchSuggestions("shoe".to_string())));

        update(
            &mut state,
            Action::SuggestionsLoaded {
                term: "shoe".to_string(),
                items: vec![Suggestion {
                    id: ProductId::from(42),
                    name: "Trail shoe".to_string(),
                }],
            },
        );
        assert_eq!(state.view(), View::Suggestions);

        let cmd = update(&mut state, Action::ChooseSuggestion(0));
        assert_eq!(cmd, Some(Command::LoadProduct(ProductId::from(42))));

        update(
            &mut state,
            Action::ProductLoaded(Box::new(ProductDetail {
                id: ProductId::from(42),
                name: "Trail shoe".to_string(),
                image: String::new(),
                description: "Grippy".to_string(),
                price: 89.5,
            })),
        );
        assert_eq!(state.view(), View::Details);
        assert_eq!(state.query(), "Trail shoe");

        // Editing after a selection drops the detail panel
        let cmd = update(&mut state, key('s'));
        assert_eq!(
            cmd,
            Some(Command::ScheduleSearch("Trail shoes".to_string()))
        );
        assert_eq!(state.view(), View::Idle);
    }

    #[test]
    fn test_quit() {
        let mut state = AppState::default();
        assert_eq!(update(&mut state, Action::Quit), None);
        assert!(state.should_quit);
    }

    #[test]
    fn test_resize_is_a_no_op() {
        let mut state = AppState::default();
        let before = state.clone();
        assert_eq!(update(&mut state, Action::Resize(120, 40)), None);
        assert_eq!(state, before);
    }
}
