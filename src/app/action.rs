use crate::app::command::Command;
use crate::domain::models::{ProductDetail, ProductId, Suggestion};

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- UI Mode Transitions ---
    ToggleHelp, // F1
    CancelMode, // Esc: close help, then clear the query, then quit

    // --- Search Input ---
    TextAreaInput(crossterm::event::KeyEvent), // Keystroke for the search box
    ClearQuery,                                // Ctrl-U

    // --- Suggestion List ---
    SelectNext,
    SelectPrev,
    ChooseSuggestion(usize), // Enter on the highlighted row, or a click

    // --- Async Results (The "Callback") ---
    // Dispatched by the debouncer and the catalog workers back to the main loop
    SearchDue(String), // Quiet period elapsed for this term
    SuggestionsLoaded {
        term: String,
        items: Vec<Suggestion>,
    },
    SearchFailed {
        term: String,
        error: String,
    },
    ProductLoaded(Box<ProductDetail>),
    ProductFailed {
        id: ProductId,
        error: String,
    },
}
