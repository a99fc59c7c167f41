//! Search form: product/color rows, finishing toggles and buttons

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use ppf_app::state::{
    AppState, Focus, COLOR_DISABLED_PLACEHOLDER, COLOR_LOADING_PLACEHOLDER, COLOR_PLACEHOLDER,
    PRODUCT_PLACEHOLDER,
};
use ppf_app::SearchFieldSlot;
use ppf_core::FinishingOption;

use crate::theme::{palette, styles};

pub const ADD_FIELD_LABEL: &str = "+ Weitere Suche hinzufügen";
pub const SEARCH_LABEL: &str = "Suchen";
pub const SEARCHING_LABEL: &str = "Suche läuft...";

/// Widest a select control gets
const MAX_CONTROL_WIDTH: usize = 32;

pub struct SearchForm<'a> {
    state: &'a AppState,
}

impl<'a> SearchForm<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn style_for(&self, focus: Focus, base: Style) -> Style {
        // The popup shows the selection while a picker is open
        if self.state.focus == focus && self.state.picker.is_none() {
            styles::focused_selected()
        } else {
            base
        }
    }

    fn row_line(&self, index: usize, slot: &SearchFieldSlot, control_width: usize) -> Line<'a> {
        let (product_text, product_style) = if slot.product().is_empty() {
            (PRODUCT_PLACEHOLDER.to_string(), styles::text_muted())
        } else {
            (slot.product().to_string(), styles::text_primary())
        };

        let (color_text, color_style) = if slot.is_loading_colors() {
            (COLOR_LOADING_PLACEHOLDER.to_string(), styles::text_muted())
        } else if !slot.is_color_enabled() {
            (COLOR_DISABLED_PLACEHOLDER.to_string(), styles::text_muted())
        } else if slot.color().is_empty() {
            (COLOR_PLACEHOLDER.to_string(), styles::text_muted())
        } else {
            (slot.color().to_string(), styles::text_primary())
        };

        let mut spans = vec![
            Span::styled(format!(" {} ", index), styles::text_secondary()),
            Span::styled(
                select_label(&product_text, control_width),
                self.style_for(Focus::Product(index), product_style),
            ),
            Span::raw(" "),
            Span::styled(
                select_label(&color_text, control_width),
                self.style_for(Focus::Color(index), color_style),
            ),
        ];
        if self.state.fields.can_remove(index) {
            spans.push(Span::styled("  ✕", styles::severity(ppf_core::Severity::Error)));
        }
        Line::from(spans)
    }

    fn finishing_line(&self) -> Line<'a> {
        let mut spans = vec![Span::styled(" Veredelung: ", styles::text_secondary())];
        for option in FinishingOption::ALL {
            let mark = if self.state.finishing.is_selected(option) {
                "[x]"
            } else {
                "[ ]"
            };
            spans.push(Span::styled(
                format!("{} {}", mark, option.as_str()),
                self.style_for(Focus::Finishing(option), styles::text_primary()),
            ));
            spans.push(Span::raw("  "));
        }
        Line::from(spans)
    }

    fn button_line(&self) -> Line<'a> {
        let mut spans = vec![Span::raw(" ")];
        if self.state.fields.can_add() {
            spans.push(Span::styled(
                format!("[{}]", ADD_FIELD_LABEL),
                self.style_for(Focus::AddField, styles::accent_bold()),
            ));
            spans.push(Span::raw("  "));
        }
        let label = if self.state.search.is_loading() {
            SEARCHING_LABEL
        } else {
            SEARCH_LABEL
        };
        spans.push(Span::styled(
            format!("[ {} ]", label),
            self.style_for(Focus::Search, styles::accent_bold()),
        ));
        Line::from(spans)
    }
}

/// `label ▾` padded to `width` columns
fn select_label(label: &str, width: usize) -> String {
    let text_width = width.saturating_sub(3);
    let mut text: String = label.chars().take(text_width).collect();
    let len = text.chars().count();
    text.extend(std::iter::repeat(' ').take(text_width - len));
    format!(" {} ▾", text)
}

impl Widget for SearchForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true)
            .title(" Suche ")
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // Index column (3) + gap (1) + remove marker (3)
        let control_width = ((inner.width as usize).saturating_sub(7) / 2).min(MAX_CONTROL_WIDTH);

        let mut lines: Vec<Line> = self
            .state
            .fields
            .active_slots()
            .map(|(index, slot)| self.row_line(index, slot, control_width))
            .collect();
        lines.push(Line::raw(""));
        lines.push(self.finishing_line());
        lines.push(self.button_line());

        Paragraph::new(lines).render(inner, buf);
    }
}
