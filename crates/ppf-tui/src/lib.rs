//! ppf-tui - Terminal UI for Probepaket Finder
//!
//! ratatui-based front end for the search form. Drives the TEA loop from
//! ppf-app with terminal events and renders the state each frame.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
