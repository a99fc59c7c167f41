//! Header bar with the app title and the data timestamp

use chrono::NaiveDateTime;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use ppf_core::format_last_update;

use crate::theme::{palette, styles};

pub const TITLE: &str = "Probepaket Finder";

/// Title on the left, last update on the right
pub struct MainHeader<'a> {
    last_update: Option<&'a NaiveDateTime>,
    refreshing: bool,
}

impl<'a> MainHeader<'a> {
    pub fn new(last_update: Option<&'a NaiveDateTime>) -> Self {
        Self {
            last_update,
            refreshing: false,
        }
    }

    /// Show a refresh indicator next to the timestamp
    pub fn refreshing(mut self, refreshing: bool) -> Self {
        self.refreshing = refreshing;
        self
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        Paragraph::new(Line::from(Span::styled(TITLE, styles::accent_bold()))).render(inner, buf);

        let mut right = vec![
            Span::styled("Letzte Aktualisierung: ", styles::text_muted()),
            Span::styled(
                format_last_update(self.last_update),
                styles::text_secondary(),
            ),
        ];
        if self.refreshing {
            right.push(Span::styled(" ↻", styles::keybinding()));
        }
        Paragraph::new(Line::from(right))
            .alignment(Alignment::Right)
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use chrono::NaiveDate;

    #[test]
    fn test_header_shows_never_without_timestamp() {
        let mut term = TestTerminal::new();
        term.render_widget(MainHeader::new(None), Rect::new(0, 0, 80, 3));

        assert!(term.buffer_contains(TITLE));
        assert!(term.buffer_contains("Letzte Aktualisierung: Nie"));
    }

    #[test]
    fn test_header_formats_timestamp() {
        let ts = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(12, 34, 56)
            .unwrap();
        let mut term = TestTerminal::new();
        term.render_widget(
            MainHeader::new(Some(&ts)).refreshing(true),
            Rect::new(0, 0, 80, 3),
        );

        assert!(term.buffer_contains("01.05.2024, 12:34:56"));
        assert!(term.buffer_contains("↻"));
    }
}
