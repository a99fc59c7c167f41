//! Search results panel

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use ppf_app::state::SearchState;
use ppf_app::PackageCard;

use crate::theme::{palette, styles};

pub const SEARCHING_TEXT: &str = "Suche läuft...";
pub const IDLE_HINT: &str = "Produkt und Farbe wählen, dann mit [s] suchen.";
pub const NO_RESULTS_TEXT: &str = "Keine passenden Probepakete gefunden.";

pub struct ResultsPanel<'a> {
    search: &'a SearchState,
}

impl<'a> ResultsPanel<'a> {
    pub fn new(search: &'a SearchState) -> Self {
        Self { search }
    }
}

/// Lines for one package card
fn card_lines(card: &PackageCard) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            card.title.clone(),
            styles::text_primary().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("[{}]", card.status_text),
            styles::package_status(card.status),
        ),
    ])];

    if !card.element.is_empty() {
        lines.push(Line::styled(
            format!("  {}", card.element),
            styles::text_secondary(),
        ));
    }
    for product in &card.products {
        lines.push(Line::styled(format!("  • {}", product), styles::text_primary()));
    }
    if !card.finishings.is_empty() {
        let mut spans = vec![Span::styled("  Veredelungen: ", styles::text_muted())];
        for finishing in &card.finishings {
            spans.push(Span::styled(
                format!(" {} ", finishing),
                Style::default()
                    .fg(palette::CONTRAST_FG)
                    .bg(palette::TEXT_SECONDARY),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }
    if let Some(url) = &card.delivery_note {
        lines.push(Line::from(vec![
            Span::styled("  Lieferschein: ", styles::text_muted()),
            Span::styled(
                url.clone(),
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]));
    }
    lines.push(Line::raw(""));
    lines
}

impl Widget for ResultsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .title(" Ergebnisse ")
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let Some(results) = self.search.results.as_ref() else {
            let (text, style) = if self.search.is_loading() {
                (SEARCHING_TEXT, styles::keybinding())
            } else {
                (IDLE_HINT, styles::text_muted())
            };
            Paragraph::new(Line::styled(text, style))
                .alignment(Alignment::Center)
                .render(inner, buf);
            return;
        };

        // Summary row: criteria left, count right
        let summary_area = Rect { height: 1, ..inner };
        Paragraph::new(Line::styled(results.summary(), styles::text_secondary()))
            .render(summary_area, buf);
        Paragraph::new(Line::styled(results.count_label(), styles::accent_bold()))
            .alignment(Alignment::Right)
            .render(summary_area, buf);

        let body = Rect {
            y: inner.y + 1,
            height: inner.height.saturating_sub(1),
            ..inner
        };
        if body.height == 0 {
            return;
        }

        if results.is_empty() {
            Paragraph::new(vec![
                Line::raw(""),
                Line::styled(NO_RESULTS_TEXT, styles::text_muted()),
            ])
            .alignment(Alignment::Center)
            .render(body, buf);
            return;
        }

        let lines: Vec<Line> = results
            .cards()
            .iter()
            .skip(self.search.scroll)
            .flat_map(card_lines)
            .collect();
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(body, buf);
    }
}
