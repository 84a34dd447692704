pub mod help;
pub mod helpers;
