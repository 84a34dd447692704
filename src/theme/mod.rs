use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod catppuccin;
pub mod glyphs;
pub mod nord;
pub mod palette;

pub use palette::Palette;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,
    pub panel_title: Style,

    pub input: Style,

    pub product_name: Style,
    pub product_price: Style,
    pub product_link: Style,
    pub product_id: Style,

    pub status_ready: Style,
    pub status_busy: Style,

    pub header_logo: Style,
    pub header_url: Style,
    pub header: Style,

    pub footer_segment_key: Style,
    pub footer_segment_val: Style,
    pub footer_group_name: Style,
    pub footer: Style,

    pub list_selected: Style,
    pub list_item: Style,
    pub dimmed: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PaletteType {
    CatppuccinMocha,
    Nord,
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        match t {
            PaletteType::CatppuccinMocha => Self::from_palette(&catppuccin::CATPPUCCIN_MOCHA),
            PaletteType::Nord => Self::from_palette(&nord::NORD),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.border),
            border_focus: Style::default().fg(p.accent),
            panel_title: Style::default()
                .bg(p.panel)
                .fg(p.text)
                .add_modifier(Modifier::BOLD),

            input: Style::default().fg(p.text),

            product_name: Style::default().fg(p.title).add_modifier(Modifier::BOLD),
            product_price: Style::default().fg(p.ok).add_modifier(Modifier::BOLD),
            product_link: Style::default()
                .fg(p.link)
                .add_modifier(Modifier::UNDERLINED),
            product_id: Style::default().fg(p.secondary).add_modifier(Modifier::DIM),

            status_ready: Style::default()
                .bg(p.ok)
                .fg(p.shadow)
                .add_modifier(Modifier::BOLD),
            status_busy: Style::default()
                .bg(p.busy)
                .fg(p.shadow)
                .add_modifier(Modifier::BOLD),

            header_logo: Style::default()
                .bg(p.accent)
                .fg(p.shadow)
                .add_modifier(Modifier::BOLD),
            header_url: Style::default()
                .bg(p.panel_raised)
                .fg(p.text)
                .add_modifier(Modifier::BOLD),
            header: Style::default().bg(p.background).fg(p.text),

            footer_segment_key: Style::default()
                .bg(p.panel)
                .fg(p.accent)
                .add_modifier(Modifier::BOLD),
            footer_segment_val: Style::default().bg(p.background).fg(p.text),
            footer_group_name: Style::default().fg(p.text_muted).add_modifier(Modifier::DIM),
            footer: Style::default().bg(p.shadow).fg(p.text_muted),

            list_selected: Style::default()
                .bg(p.accent)
                .fg(p.shadow)
                .add_modifier(Modifier::BOLD),
            list_item: Style::default().fg(p.text),
            dimmed: Style::default().fg(p.faint).add_modifier(Modifier::DIM),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::CatppuccinMocha)
    }
}
