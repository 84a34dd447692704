// Powerline / Nerd Font symbols used by the header
pub const SEP_RIGHT: &str = "\u{e0b0}";
pub const SEARCH: &str = "\u{f002}";
pub const LINK: &str = "\u{f0c1}";
