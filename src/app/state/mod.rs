use super::keymap::KeyMap;
use crate::domain::models::{ProductDetail, ProductId};
use std::sync::Arc;

pub mod input;
pub mod search;

// Re-exports
pub use input::AppTextArea;
pub use search::SearchState;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AppMode {
    Normal, // Typing in the search box
    Help,   // Showing the help overlay
}

/// What the body of the screen is showing.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum View {
    Idle,
    Suggestions,
    Details,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState<'a> {
    // --- Status ---
    pub should_quit: bool,
    pub mode: AppMode,
    pub api_url: String,

    // --- Search ---
    pub input: AppTextArea<'a>,
    pub search: SearchState,

    // --- Details ---
    pub selected_product: Option<ProductDetail>,
    pub loading_product: Option<ProductId>,

    // --- Animation ---
    pub frame_count: u64,
    pub spinner: String,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub theme: crate::theme::Theme,
    pub currency: String,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(config: &super::config::Config, api_url: String) -> Self {
        Self {
            api_url,
            theme: crate::theme::Theme::from_palette_type(config.theme),
            currency: config.currency.clone(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn query(&self) -> String {
        self.input.text()
    }

    #[must_use]
    pub fn trimmed_query(&self) -> String {
        self.input.text().trim().to_string()
    }

    #[must_use]
    pub fn view(&self) -> View {
        if self.selected_product.is_some() {
            View::Details
        } else if !self.search.suggestions.is_empty() {
            View::Suggestions
        } else {
            View::Idle
        }
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.search.in_flight > 0 || self.loading_product.is_some()
    }

    pub fn advance_spinner(&mut self) {
        self.frame_count = self.frame_count.wrapping_add(1);
        let idx = (self.frame_count % SPINNER_FRAMES.len() as u64) as usize;
        self.spinner = SPINNER_FRAMES[idx].to_string();
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        Self {
            should_quit: false,
            mode: AppMode::Normal,
            api_url: String::new(),
            input: AppTextArea::default(),
            search: SearchState::default(),
            selected_product: None,
            loading_product: None,
            frame_count: 0,
            spinner: SPINNER_FRAMES[0].to_string(),
            keymap: Arc::new(KeyMap::default()),
            theme: crate::theme::Theme::default(),
            currency: "€".to_string(),
        }
    }
}
