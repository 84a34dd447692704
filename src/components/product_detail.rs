use crate::domain::models::ProductDetail;
use crate::theme::{glyphs, Theme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

pub struct ProductDetailView<'a> {
    pub product: &'a ProductDetail,
    pub currency: &'a str,
    pub theme: &'a Theme,
}

impl Widget for ProductDetailView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.product;

        let mut lines = vec![
            Line::from(vec![
                Span::styled(p.name.as_str(), self.theme.product_name),
                Span::styled(format!("  #{}", p.id), self.theme.product_id),
            ]),
            Line::from(""),
        ];

        if !p.image.is_empty() {
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", glyphs::LINK), self.theme.dimmed),
                Span::styled(p.image.as_str(), self.theme.product_link),
            ]));
            lines.push(Line::from(""));
        }

        if !p.description.is_empty() {
            lines.extend(
                p.description
                    .lines()
                    .map(|l| Line::from(Span::styled(l, self.theme.list_item))),
            );
            lines.push(Line::from(""));
        }

        lines.push(Line::from(vec![
            Span::styled("Price: ", self.theme.dimmed),
            Span::styled(p.formatted_price(self.currency), self.theme.product_price),
        ]));

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
