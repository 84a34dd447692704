use ratatui::style::Color;

/// Colour roles a [`super::Theme`] is derived from.
pub struct Palette {
    pub background: Color,
    pub shadow: Color,
    pub panel: Color,
    pub panel_raised: Color,
    pub border: Color,
    pub text: Color,
    pub text_muted: Color,
    pub faint: Color,
    pub secondary: Color,
    pub accent: Color,
    pub link: Color,
    pub title: Color,
    pub ok: Color,
    pub busy: Color,
}
