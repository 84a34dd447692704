use super::palette::Palette;
use ratatui::style::Color;

pub const NORD: Palette = Palette {
    background: Color::Rgb(46, 52, 64),
    shadow: Color::Rgb(43, 48, 59),
    panel: Color::Rgb(59, 66, 82),
    panel_raised: Color::Rgb(67, 76, 94),
    border: Color::Rgb(76, 86, 106),
    text: Color::Rgb(236, 239, 244),
    text_muted: Color::Rgb(216, 222, 233),
    faint: Color::Rgb(97, 110, 136),
    secondary: Color::Rgb(143, 188, 187),
    accent: Color::Rgb(136, 192, 208),
    link: Color::Rgb(129, 161, 193),
    title: Color::Rgb(180, 142, 173),
    ok: Color::Rgb(163, 190, 140),
    busy: Color::Rgb(235, 203, 139),
};
