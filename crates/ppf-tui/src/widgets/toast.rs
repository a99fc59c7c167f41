//! Toast notification overlay

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};

use ppf_app::Toast;

use crate::theme::{palette, styles};

const MAX_WIDTH: u16 = 60;

/// Renders in the top-right corner of the given area
pub struct ToastWidget<'a> {
    toast: &'a Toast,
}

impl<'a> ToastWidget<'a> {
    pub fn new(toast: &'a Toast) -> Self {
        Self { toast }
    }

    /// Corner rectangle sized to the message
    pub fn area_in(&self, area: Rect) -> Rect {
        let text_width = char_width(&self.toast.display_text()).saturating_add(4);
        let width = text_width.min(MAX_WIDTH).min(area.width);
        let inner_width = width.saturating_sub(4).max(1);
        let rows = char_width(&self.toast.message)
            .saturating_add(2)
            .div_ceil(inner_width);
        let height = rows.saturating_add(2).min(area.height);
        Rect {
            x: area.x + area.width - width,
            y: area.y,
            width,
            height,
        }
    }
}

/// Character count, clamped to the terminal coordinate range
fn char_width(text: &str) -> u16 {
    u16::try_from(text.chars().count()).unwrap_or(u16::MAX)
}

impl Widget for ToastWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rect = self.area_in(area);
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        Clear.render(rect, buf);

        let style = styles::severity(self.toast.severity);
        let block = styles::glass_block(false)
            .border_style(style)
            .style(Style::default().bg(palette::CARD_BG));

        Paragraph::new(Line::from(vec![
            Span::styled(format!("{} ", self.toast.severity.icon()), style),
            Span::styled(self.toast.message.clone(), styles::text_primary()),
        ]))
        .wrap(Wrap { trim: true })
        .block(block)
        .render(rect, buf);
    }
}
