use super::action::Action;
use super::state::AppMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Bindings for keys that never reach the search box.
///
/// Printable characters are deliberately absent from the normal-mode map so
/// that every letter can be typed into the query.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    pub global: HashMap<KeyEvent, Action>,
    pub help_mode: HashMap<KeyEvent, Action>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut global = HashMap::new();
        let mut help_mode = HashMap::new();

        // --- Normal Mode ---
        global.insert(ctrl('c'), Action::Quit);
        global.insert(key(KeyCode::Esc), Action::CancelMode);
        global.insert(key(KeyCode::F(1)), Action::ToggleHelp);
        global.insert(key(KeyCode::Down), Action::SelectNext);
        global.insert(key(KeyCode::Tab), Action::SelectNext);
        global.insert(ctrl('n'), Action::SelectNext);
        global.insert(key(KeyCode::Up), Action::SelectPrev);
        global.insert(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT), Action::SelectPrev);
        global.insert(ctrl('p'), Action::SelectPrev);
        global.insert(ctrl('u'), Action::ClearQuery);

        // --- Help Overlay ---
        help_mode.insert(ctrl('c'), Action::Quit);
        help_mode.insert(key(KeyCode::Esc), Action::ToggleHelp);
        help_mode.insert(key(KeyCode::F(1)), Action::ToggleHelp);
        help_mode.insert(key(KeyCode::Char('q')), Action::ToggleHelp);
        help_mode.insert(key(KeyCode::Char('?')), Action::ToggleHelp);

        Self { global, help_mode }
    }
}

impl KeyMap {
    #[must_use]
    pub fn get_action(&self, event: KeyEvent, mode: AppMode) -> Option<Action> {
        match mode {
            AppMode::Help => self.help_mode.get(&event).cloned(),
            AppMode::Normal => self.global.get(&event).cloned(),
        }
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_are_not_bound_in_normal_mode() {
        let keymap = KeyMap::default();
        for c in ['q', 'j', 'k', '?', 's'] {
            assert_eq!(keymap.get_action(key(KeyCode::Char(c)), AppMode::Normal), None);
        }
    }

    #[test]
    fn test_help_mode_closes_on_q() {
        let keymap = KeyMap::default();
        assert_eq!(
            keymap.get_action(key(KeyCode::Char('q')), AppMode::Help),
            Some(Action::ToggleHelp)
        );
        assert_eq!(
            keymap.get_action(ctrl('c'), AppMode::Normal),
            Some(Action::Quit)
        );
    }
}
