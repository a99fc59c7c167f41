//! Screen layout definitions for the TUI
//!
//! The form grows with the number of active search rows; the results panel
//! takes whatever is left.

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title and last-update line
    pub header: Rect,
    /// Search rows, finishing toggles and buttons
    pub form: Rect,
    /// Result summary and package cards
    pub results: Rect,
    /// Keybinding hints
    pub status_bar: Rect,
}

/// Rows the form needs besides its search rows: borders, a spacer, the
/// finishing line and the button line
const FORM_CHROME: u16 = 5;

/// Form height for `active_rows` search rows
pub fn form_height(active_rows: usize) -> u16 {
    active_rows as u16 + FORM_CHROME
}

/// Create the main screen layout
///
/// # Arguments
/// * `area` - Total screen area
/// * `active_rows` - Number of active search rows
pub fn create(area: Rect, active_rows: usize) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(form_height(active_rows)),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        form: chunks[1],
        results: chunks[2],
        status_bar: chunks[3],
    }
}

/// Centered popup of at most `width` x `height` inside `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [vertical] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(vertical);
    rect
}
