//! Full-screen rendering tests

use ppf_app::handler::update;
use ppf_app::{Message, PickerTarget};
use ppf_client::test_utils::test_package;
use ppf_client::SearchOutcome;
use ppf_core::SearchPair;

use super::view;
use crate::test_utils::{ready_state, TestTerminal};

#[test]
fn test_initial_screen() {
    let state = ready_state(&["Cap", "Shirt"]);
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &state));

    assert!(term.line_contains(1, "Probepaket Finder"));
    assert!(term.line_contains(1, "Nie"));
    assert!(term.buffer_contains("Produkt auswählen..."));
    assert!(term.buffer_contains("mit [s] suchen"));
    assert!(term.line_contains(23, "Suchen"));
}

#[test]
fn test_picker_overlays_form() {
    let mut state = ready_state(&["Cap", "Shirt"]);
    update(&mut state, Message::OpenPicker(PickerTarget::Product(1)));

    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("Produkt 1"));
    assert!(term.buffer_contains("Shirt"));
    assert!(term.buffer_contains("Esc Abbrechen"));
}

#[test]
fn test_results_and_toast() {
    let mut state = ready_state(&["Cap"]);
    state.search.begin(vec![SearchPair::new("Cap", "Rot")]);
    let generation = state.search.in_flight.unwrap_or_default();
    update(
        &mut state,
        Message::SearchCompleted {
            generation,
            outcome: SearchOutcome {
                packages: vec![test_package("1017", "versendet", ("Cap", "M", "Rot"))],
                criteria: vec![SearchPair::new("Cap", "Rot")],
            },
        },
    );
    update(&mut state, Message::Refresh);

    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("Suche nach: Cap (Rot)"));
    assert!(term.buffer_contains("#1017"));
    assert!(term.buffer_contains("[Versendet]"));
    assert!(term.buffer_contains("Daten werden aktualisiert..."));
}

#[test]
fn test_compact_terminal_does_not_panic() {
    let mut state = ready_state(&["Cap"]);
    for _ in 0..3 {
        update(&mut state, Message::AddField);
    }
    update(&mut state, Message::Search);

    let mut term = TestTerminal::compact();
    term.draw_with(|frame| view(frame, &state));
}
