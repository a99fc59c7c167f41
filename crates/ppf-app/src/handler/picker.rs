//! Option picker popup handlers

use crate::message::Message;
use crate::state::{AppState, PickerState, PickerTarget, COLOR_DISABLED_PLACEHOLDER};
use crate::toast::Toast;

use super::UpdateResult;

/// Open the picker for a product or color control
pub fn open(state: &mut AppState, target: PickerTarget) -> UpdateResult {
    let picker = match target {
        PickerTarget::Product(index) => {
            let Some(slot) = state.fields.slot(index) else {
                return UpdateResult::none();
            };
            PickerState::new(target, state.fields.product_options(), slot.product())
        }
        PickerTarget::Color(index) => {
            let Some(slot) = state.fields.slot(index) else {
                return UpdateResult::none();
            };
            if !slot.is_color_enabled() {
                if !slot.is_loading_colors() {
                    state.show_toast(Toast::info(COLOR_DISABLED_PLACEHOLDER));
                }
                return UpdateResult::none();
            }
            PickerState::new(target, slot.color_options(), slot.color())
        }
    };

    state.picker = Some(picker);
    UpdateResult::none()
}

pub fn move_by(state: &mut AppState, delta: isize) -> UpdateResult {
    if let Some(picker) = state.picker.as_mut() {
        picker.move_by(delta);
    }
    UpdateResult::none()
}

pub fn first(state: &mut AppState) -> UpdateResult {
    if let Some(picker) = state.picker.as_mut() {
        picker.select_first();
    }
    UpdateResult::none()
}

pub fn last(state: &mut AppState) -> UpdateResult {
    if let Some(picker) = state.picker.as_mut() {
        picker.select_last();
    }
    UpdateResult::none()
}

/// Close the picker and write the highlighted option back
pub fn confirm(state: &mut AppState) -> UpdateResult {
    let Some(picker) = state.picker.take() else {
        return UpdateResult::none();
    };
    let value = picker.selected_value().to_string();

    match picker.target {
        PickerTarget::Product(index) => {
            let unchanged = state
                .fields
                .slot(index)
                .is_some_and(|slot| slot.product() == value);
            if unchanged {
                return UpdateResult::none();
            }
            UpdateResult::message(Message::SelectProduct {
                index,
                product: value,
            })
        }
        PickerTarget::Color(index) => {
            UpdateResult::message(Message::SelectColor { index, color: value })
        }
    }
}
