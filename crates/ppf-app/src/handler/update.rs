//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use ppf_core::prelude::*;
use ppf_core::AppPhase;

use crate::message::Message;
use crate::results::SearchResults;
use crate::search_fields::ProductChange;
use crate::state::{AppState, Focus};
use crate::toast::Toast;

use super::{keys::handle_key, picker, UpdateAction, UpdateResult};

pub const LOAD_PRODUCTS_FAILED: &str = "Fehler beim Laden der Produkte: ";
pub const LOAD_COLORS_FAILED: &str = "Fehler beim Laden der Farben: ";
pub const SEARCH_FAILED: &str = "Fehler bei der Suche: ";
pub const REFRESH_FAILED: &str = "Fehler beim Aktualisieren: ";
pub const REFRESH_STARTED: &str = "Daten werden aktualisiert...";
pub const REFRESH_SUCCEEDED: &str = "Daten erfolgreich aktualisiert!";

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            state.expire_toast(Instant::now());
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Catalog
        // ─────────────────────────────────────────────────────────
        Message::Initialize => {
            state.fields.initialize();
            state.focus = Focus::Product(1);
            state.catalog.loading = true;
            UpdateResult::action(UpdateAction::LoadProducts)
        }

        Message::LoadProducts => {
            state.catalog.loading = true;
            UpdateResult::action(UpdateAction::LoadProducts)
        }

        Message::ProductsLoaded { catalog } => {
            info!("Catalog loaded: {} products", catalog.products.len());
            state.fields.set_product_options(catalog.products);
            state.catalog.loading = false;
            if catalog.last_update.is_some() {
                state.catalog.last_update = catalog.last_update;
            }
            state.phase = AppPhase::Ready;
            state.clamp_focus();
            UpdateResult::none()
        }

        Message::ProductsLoadFailed { error } => {
            state.catalog.loading = false;
            state.phase = AppPhase::Ready;
            state.show_toast(Toast::error(format!("{}{}", LOAD_PRODUCTS_FAILED, error)));
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Search Fields
        // ─────────────────────────────────────────────────────────
        Message::SelectProduct { index, product } => {
            match state.fields.on_product_changed(index, &product) {
                Some(ProductChange::ColorsRequested { token, product }) => {
                    UpdateResult::action(UpdateAction::LoadColors { token, product })
                }
                Some(ProductChange::Cleared) | None => UpdateResult::none(),
            }
        }

        Message::ColorsLoaded { token, colors } => {
            match state.fields.apply_colors(token, colors) {
                Some(index) => debug!("Colors applied to row {}", index),
                None => debug!("Dropping stale color response {:?}", token),
            }
            UpdateResult::none()
        }

        Message::ColorsLoadFailed { token, error } => {
            if state.fields.reject_colors(token).is_some() {
                state.show_toast(Toast::error(format!("{}{}", LOAD_COLORS_FAILED, error)));
            } else {
                debug!("Ignoring failure of stale color request: {}", error);
            }
            UpdateResult::none()
        }

        Message::SelectColor { index, color } => {
            state.fields.select_color(index, &color);
            UpdateResult::none()
        }

        Message::AddField => {
            if state.fields.add_field() {
                state.focus = Focus::Product(state.fields.active_count());
            }
            UpdateResult::none()
        }

        Message::RemoveField { index } => {
            if state.fields.remove_field(index) {
                state.clamp_focus();
            }
            UpdateResult::none()
        }

        Message::ToggleFinishing(option) => {
            state.finishing.toggle(option);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Search
        // ─────────────────────────────────────────────────────────
        Message::Search => handle_search(state),

        Message::SearchCompleted {
            generation,
            outcome,
        } => {
            if !state.search.is_current(generation) {
                debug!("Dropping stale search response #{}", generation);
                return UpdateResult::none();
            }
            let submitted = state.search.finish();
            state.search.results = Some(SearchResults::from_outcome(outcome, &submitted));
            UpdateResult::none()
        }

        Message::SearchFailed { generation, error } => {
            if !state.search.is_current(generation) {
                debug!("Ignoring failure of stale search #{}", generation);
                return UpdateResult::none();
            }
            state.search.finish();
            state.show_toast(Toast::error(format!("{}{}", SEARCH_FAILED, error)));
            UpdateResult::none()
        }

        Message::ScrollResults(delta) => {
            let len = state.search.results.as_ref().map_or(0, SearchResults::len);
            state.search.scroll = state
                .search
                .scroll
                .saturating_add_signed(delta)
                .min(len.saturating_sub(1));
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Refresh
        // ─────────────────────────────────────────────────────────
        Message::Refresh => {
            if state.catalog.refreshing {
                return UpdateResult::none();
            }
            state.catalog.refreshing = true;
            state.show_toast(Toast::info(REFRESH_STARTED));
            UpdateResult::action(UpdateAction::Refresh)
        }

        Message::RefreshCompleted { last_update } => {
            state.catalog.refreshing = false;
            if last_update.is_some() {
                state.catalog.last_update = last_update;
            }
            state.show_toast(Toast::success(REFRESH_SUCCEEDED));
            UpdateResult::message(Message::LoadProducts)
        }

        Message::RefreshFailed { error } => {
            state.catalog.refreshing = false;
            state.show_toast(Toast::error(format!("{}{}", REFRESH_FAILED, error)));
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.move_focus(1);
            UpdateResult::none()
        }

        Message::FocusPrev => {
            state.move_focus(-1);
            UpdateResult::none()
        }

        Message::OpenPicker(target) => picker::open(state, target),
        Message::PickerMove(delta) => picker::move_by(state, delta),
        Message::PickerFirst => picker::first(state),
        Message::PickerLast => picker::last(state),
        Message::PickerConfirm => picker::confirm(state),
        Message::PickerCancel => {
            state.picker = None;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Notifications
        // ─────────────────────────────────────────────────────────
        Message::DismissToast => {
            state.toast = None;
            UpdateResult::none()
        }
    }
}

fn handle_search(state: &mut AppState) -> UpdateResult {
    let criteria = match state.fields.validated_pairs() {
        Ok(criteria) => criteria,
        Err(e) => {
            state.show_toast(Toast::from_error("", &e));
            return UpdateResult::none();
        }
    };

    let finishing = state.finishing.selected();
    let generation = state.search.begin(criteria.clone());
    info!(
        "Search #{}: {} criteria, finishing {:?}",
        generation,
        criteria.len(),
        finishing
    );

    UpdateResult::action(UpdateAction::RunSearch {
        generation,
        criteria,
        finishing,
    })
}
