use crate::domain::models::Suggestion;
use ratatui::widgets::ListState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    pub suggestions: Vec<Suggestion>,
    pub list_state: ListState,
    pub in_flight: usize,
    // Term whose results are currently applied
    pub last_term: Option<String>,
}

impl SearchState {
    pub fn replace(&mut self, items: Vec<Suggestion>) {
        self.suggestions = items;
        self.list_state = ListState::default();
        if !self.suggestions.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub fn clear(&mut self) {
        self.replace(Vec::new());
        self.last_term = None;
    }
}
