pub mod action;
pub mod command;
pub mod config;
pub mod debounce;
pub mod features;
pub mod input;
pub mod keymap;
pub mod logging;
pub mod r#loop;
pub mod reducer;
pub mod state;
pub mod ui;
