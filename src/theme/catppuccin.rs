use super::palette::Palette;
use ratatui::style::Color;

// Mocha flavour
pub const CATPPUCCIN_MOCHA: Palette = Palette {
    background: Color::Rgb(30, 30, 46),
    shadow: Color::Rgb(17, 17, 27),
    panel: Color::Rgb(49, 50, 68),
    panel_raised: Color::Rgb(69, 71, 90),
    border: Color::Rgb(88, 91, 112),
    text: Color::Rgb(205, 214, 244),
    text_muted: Color::Rgb(166, 173, 200),
    faint: Color::Rgb(108, 112, 134),
    secondary: Color::Rgb(127, 132, 156),
    accent: Color::Rgb(137, 180, 250),
    link: Color::Rgb(116, 199, 236),
    title: Color::Rgb(203, 166, 247),
    ok: Color::Rgb(166, 227, 161),
    busy: Color::Rgb(249, 226, 175),
};
