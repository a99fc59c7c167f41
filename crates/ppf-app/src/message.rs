//! Message types for the application (TEA pattern)

use chrono::NaiveDateTime;

use ppf_client::{ProductCatalog, SearchOutcome};
use ppf_core::FinishingOption;

use crate::input_key::InputKey;
use crate::search_fields::RequestToken;
use crate::state::PickerTarget;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),
    /// Tick event for periodic updates
    Tick,
    /// Quit immediately
    Quit,

    // ─────────────────────────────────────────────────────────
    // Catalog
    // ─────────────────────────────────────────────────────────
    /// Reset the form and load the product list
    Initialize,
    /// Reload the product list, keeping the form
    LoadProducts,
    ProductsLoaded { catalog: ProductCatalog },
    ProductsLoadFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Search Fields
    // ─────────────────────────────────────────────────────────
    SelectProduct { index: usize, product: String },
    ColorsLoaded {
        token: RequestToken,
        colors: Vec<String>,
    },
    ColorsLoadFailed { token: RequestToken, error: String },
    SelectColor { index: usize, color: String },
    AddField,
    RemoveField { index: usize },
    ToggleFinishing(FinishingOption),

    // ─────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────
    Search,
    SearchCompleted {
        generation: u64,
        outcome: SearchOutcome,
    },
    SearchFailed { generation: u64, error: String },
    ScrollResults(isize),

    // ─────────────────────────────────────────────────────────
    // Refresh
    // ─────────────────────────────────────────────────────────
    Refresh,
    RefreshCompleted { last_update: Option<NaiveDateTime> },
    RefreshFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    FocusNext,
    FocusPrev,
    OpenPicker(PickerTarget),
    PickerMove(isize),
    PickerFirst,
    PickerLast,
    PickerConfirm,
    PickerCancel,

    // ─────────────────────────────────────────────────────────
    // Notifications
    // ─────────────────────────────────────────────────────────
    DismissToast,
}
