//! Option picker popup

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, List, ListItem, ListState, StatefulWidget, Widget},
};

use ppf_app::{PickerState, PickerTarget};

use crate::layout::centered_rect;
use crate::theme::styles;

const POPUP_WIDTH: u16 = 40;
/// Borders plus at most this many visible options
const MAX_VISIBLE: u16 = 12;

pub struct PickerPopup<'a> {
    picker: &'a PickerState,
}

impl<'a> PickerPopup<'a> {
    pub fn new(picker: &'a PickerState) -> Self {
        Self { picker }
    }

    fn title(&self) -> String {
        match self.picker.target {
            PickerTarget::Product(index) => format!(" Produkt {} ", index),
            PickerTarget::Color(index) => format!(" Farbe {} ", index),
        }
    }
}

impl Widget for PickerPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let visible = (self.picker.options.len() as u16).min(MAX_VISIBLE);
        let popup = centered_rect(POPUP_WIDTH, visible + 2, area);
        Clear.render(popup, buf);

        let title = self.title();
        let block = styles::modal_block(&title);

        let items: Vec<ListItem> = (0..self.picker.options.len())
            .map(|i| {
                let style = if self.picker.options[i].is_empty() {
                    styles::text_muted()
                } else {
                    styles::text_primary()
                };
                ListItem::new(Line::from(Span::styled(
                    self.picker.label(i).to_string(),
                    style,
                )))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(styles::focused_selected())
            .highlight_symbol("› ");

        let mut list_state = ListState::default().with_selected(Some(self.picker.selected));
        StatefulWidget::render(list, popup, buf, &mut list_state);
    }
}
