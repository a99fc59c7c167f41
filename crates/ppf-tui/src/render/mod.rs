//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use ppf_app::AppState;

use crate::theme::palette;
use crate::{layout, widgets};

/// Render the complete UI. Pure function of the state.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area, state.fields.active_count());

    frame.render_widget(
        widgets::MainHeader::new(state.catalog.last_update.as_ref())
            .refreshing(state.catalog.refreshing),
        areas.header,
    );
    frame.render_widget(widgets::SearchForm::new(state), areas.form);
    frame.render_widget(widgets::ResultsPanel::new(&state.search), areas.results);
    frame.render_widget(widgets::StatusBar::new(state.ui_mode()), areas.status_bar);

    if let Some(picker) = &state.picker {
        frame.render_widget(widgets::PickerPopup::new(picker), area);
    }

    if let Some(toast) = &state.toast {
        frame.render_widget(widgets::ToastWidget::new(toast), area);
    }
}
