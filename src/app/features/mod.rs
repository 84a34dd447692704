pub mod catalog;
pub mod details;
pub mod search;
pub mod ui;
