//! Widget components for the TUI

mod header;
mod picker;
mod results;
mod search_form;
mod status_bar;
mod toast;

pub use header::MainHeader;
pub use picker::PickerPopup;
pub use results::ResultsPanel;
pub use search_form::SearchForm;
pub use status_bar::StatusBar;
pub use toast::ToastWidget;
