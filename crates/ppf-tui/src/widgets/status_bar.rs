//! Keybinding hints at the bottom of the screen

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use ppf_app::UiMode;

use crate::theme::styles;

const FORM_HINTS: &[(&str, &str)] = &[
    ("Tab", "Weiter"),
    ("Enter", "Auswählen"),
    ("a", "Feld hinzufügen"),
    ("d", "Feld entfernen"),
    ("s", "Suchen"),
    ("r", "Aktualisieren"),
    ("q", "Beenden"),
];

const PICKER_HINTS: &[(&str, &str)] = &[
    ("↑↓", "Bewegen"),
    ("Enter", "Übernehmen"),
    ("Esc", "Abbrechen"),
];

pub struct StatusBar {
    mode: UiMode,
}

impl StatusBar {
    pub fn new(mode: UiMode) -> Self {
        Self { mode }
    }
}

impl Widget for StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hints = match self.mode {
            UiMode::Form => FORM_HINTS,
            UiMode::Picker => PICKER_HINTS,
        };

        let mut spans = vec![Span::raw(" ")];
        for (key, label) in hints {
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}  ", label), styles::text_muted()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
