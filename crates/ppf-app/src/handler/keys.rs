//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus, PickerTarget, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode() {
        UiMode::Form => handle_key_form(state, key),
        UiMode::Picker => handle_key_picker(key),
    }
}

fn handle_key_form(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Esc if state.toast.is_some() => Some(Message::DismissToast),

        InputKey::Tab | InputKey::Down | InputKey::Char('j') => Some(Message::FocusNext),
        InputKey::BackTab | InputKey::Up | InputKey::Char('k') => Some(Message::FocusPrev),

        InputKey::Enter | InputKey::Char(' ') => activate(state.focus),

        InputKey::Char('a') => Some(Message::AddField),
        InputKey::Char('d') | InputKey::Delete => {
            let index = state.focus.slot_index()?;
            state
                .fields
                .can_remove(index)
                .then_some(Message::RemoveField { index })
        }

        InputKey::Char('s') => Some(Message::Search),
        InputKey::Char('r') => Some(Message::Refresh),

        InputKey::PageDown | InputKey::Char('J') => Some(Message::ScrollResults(1)),
        InputKey::PageUp | InputKey::Char('K') => Some(Message::ScrollResults(-1)),

        _ => None,
    }
}

/// Message for pressing Enter on the focused control
fn activate(focus: Focus) -> Option<Message> {
    Some(match focus {
        Focus::Product(index) => Message::OpenPicker(PickerTarget::Product(index)),
        Focus::Color(index) => Message::OpenPicker(PickerTarget::Color(index)),
        Focus::Finishing(option) => Message::ToggleFinishing(option),
        Focus::AddField => Message::AddField,
        Focus::Search => Message::Search,
    })
}

fn handle_key_picker(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') | InputKey::BackTab => Some(Message::PickerMove(-1)),
        InputKey::Down | InputKey::Char('j') | InputKey::Tab => Some(Message::PickerMove(1)),
        InputKey::PageUp => Some(Message::PickerMove(-10)),
        InputKey::PageDown => Some(Message::PickerMove(10)),
        InputKey::Home => Some(Message::PickerFirst),
        InputKey::End => Some(Message::PickerLast),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::PickerConfirm),
        InputKey::Esc | InputKey::Char('q') => Some(Message::PickerCancel),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}
