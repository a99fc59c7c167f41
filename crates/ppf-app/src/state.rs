//! Application state (Model in TEA pattern)

use std::time::Instant;

use chrono::NaiveDateTime;

use ppf_core::{AppPhase, FinishingOption, SearchPair};

use crate::config::Settings;
use crate::results::SearchResults;
use crate::search_fields::SearchFieldManager;
use crate::toast::Toast;

/// Current UI mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Navigating the form
    Form,
    /// Option picker popup open
    Picker,
}

/// Focusable form controls, slots addressed by 1-based index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Product(usize),
    Color(usize),
    Finishing(FinishingOption),
    AddField,
    Search,
}

impl Focus {
    /// Slot the control belongs to, if any
    pub fn slot_index(&self) -> Option<usize> {
        match self {
            Focus::Product(index) | Focus::Color(index) => Some(*index),
            _ => None,
        }
    }
}

/// Which control a picker writes back to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerTarget {
    Product(usize),
    Color(usize),
}

/// Option list popup for a product or color control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerState {
    pub target: PickerTarget,
    /// First entry is always the empty "nothing selected" option
    pub options: Vec<String>,
    pub selected: usize,
}

impl PickerState {
    pub fn new(target: PickerTarget, choices: &[String], current: &str) -> Self {
        let mut options = Vec::with_capacity(choices.len() + 1);
        options.push(String::new());
        options.extend(choices.iter().cloned());
        let selected = options.iter().position(|o| o == current).unwrap_or(0);
        Self {
            target,
            options,
            selected,
        }
    }

    /// Move the cursor by `delta`, clamped to the list
    pub fn move_by(&mut self, delta: isize) {
        let last = self.options.len().saturating_sub(1);
        self.selected = self.selected.saturating_add_signed(delta).min(last);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.options.len().saturating_sub(1);
    }

    pub fn selected_value(&self) -> &str {
        self.options
            .get(self.selected)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Label for an option; the empty option gets a placeholder
    pub fn label(&self, index: usize) -> &str {
        match self.options.get(index).map(String::as_str) {
            Some("") | None => match self.target {
                PickerTarget::Product(_) => PRODUCT_PLACEHOLDER,
                PickerTarget::Color(_) => COLOR_PLACEHOLDER,
            },
            Some(option) => option,
        }
    }
}

pub const PRODUCT_PLACEHOLDER: &str = "Produkt auswählen...";
pub const COLOR_PLACEHOLDER: &str = "Farbe auswählen...";
pub const COLOR_DISABLED_PLACEHOLDER: &str = "Zuerst ein Produkt auswählen";
pub const COLOR_LOADING_PLACEHOLDER: &str = "Farben werden geladen...";

/// Selected finishing filters, in the fixed order of [`FinishingOption::ALL`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FinishingSelection {
    checked: [bool; 3],
}

impl FinishingSelection {
    fn position(option: FinishingOption) -> usize {
        FinishingOption::ALL
            .iter()
            .position(|o| *o == option)
            .unwrap_or(0)
    }

    pub fn toggle(&mut self, option: FinishingOption) {
        let i = Self::position(option);
        self.checked[i] = !self.checked[i];
    }

    pub fn is_selected(&self, option: FinishingOption) -> bool {
        self.checked[Self::position(option)]
    }

    pub fn selected(&self) -> Vec<FinishingOption> {
        FinishingOption::ALL
            .iter()
            .copied()
            .filter(|o| self.is_selected(*o))
            .collect()
    }
}

/// Product catalog loading state
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    pub loading: bool,
    pub refreshing: bool,
    pub last_update: Option<NaiveDateTime>,
}

/// Search request and result state
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Generation of the search whose response is awaited
    pub in_flight: Option<u64>,
    /// Criteria of the in-flight search
    pub submitted: Vec<SearchPair>,
    pub results: Option<SearchResults>,
    /// First visible result card
    pub scroll: usize,
    next_generation: u64,
}

impl SearchState {
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start a new search, superseding any in-flight one
    pub fn begin(&mut self, criteria: Vec<SearchPair>) -> u64 {
        self.next_generation += 1;
        self.in_flight = Some(self.next_generation);
        self.submitted = criteria;
        self.results = None;
        self.scroll = 0;
        self.next_generation
    }

    /// Whether `generation` is the search being awaited
    pub fn is_current(&self, generation: u64) -> bool {
        self.in_flight == Some(generation)
    }

    /// Ends the in-flight search, returning its criteria
    pub fn finish(&mut self) -> Vec<SearchPair> {
        self.in_flight = None;
        std::mem::take(&mut self.submitted)
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone)]
pub struct AppState {
    pub phase: AppPhase,
    pub settings: Settings,
    pub fields: SearchFieldManager,
    pub finishing: FinishingSelection,
    pub catalog: CatalogState,
    pub search: SearchState,
    pub toast: Option<Toast>,
    pub focus: Focus,
    pub picker: Option<PickerState>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            phase: AppPhase::Initializing,
            settings,
            fields: SearchFieldManager::new(),
            finishing: FinishingSelection::default(),
            catalog: CatalogState::default(),
            search: SearchState::default(),
            toast: None,
            focus: Focus::Product(1),
            picker: None,
        }
    }

    pub fn ui_mode(&self) -> UiMode {
        if self.picker.is_some() {
            UiMode::Picker
        } else {
            UiMode::Form
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn show_toast(&mut self, toast: Toast) {
        self.toast = Some(toast);
    }

    /// Drop the toast once it has been visible for the configured duration
    pub fn expire_toast(&mut self, now: Instant) {
        let duration = self.settings.ui.toast_duration();
        if self
            .toast
            .as_ref()
            .is_some_and(|t| t.is_expired(now, duration))
        {
            self.toast = None;
        }
    }

    /// Focusable controls in tab order
    pub fn focus_ring(&self) -> Vec<Focus> {
        let mut ring = Vec::with_capacity(self.fields.active_count() * 2 + 5);
        for index in 1..=self.fields.active_count() {
            ring.push(Focus::Product(index));
            ring.push(Focus::Color(index));
        }
        ring.extend(FinishingOption::ALL.iter().copied().map(Focus::Finishing));
        if self.fields.can_add() {
            ring.push(Focus::AddField);
        }
        ring.push(Focus::Search);
        ring
    }

    /// Move focus by `delta` positions around the ring
    pub fn move_focus(&mut self, delta: isize) {
        let ring = self.focus_ring();
        let len = ring.len() as isize;
        let current = ring.iter().position(|f| *f == self.focus).unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(len);
        self.focus = ring[next as usize];
    }

    /// Pull focus back onto the form when its control disappeared
    pub fn clamp_focus(&mut self) {
        if self.focus_ring().contains(&self.focus) {
            return;
        }
        self.focus = match self.focus {
            Focus::Product(_) => Focus::Product(self.fields.active_count()),
            Focus::Color(_) => Focus::Color(self.fields.active_count()),
            Focus::AddField => Focus::Search,
            other => other,
        };
    }
}
