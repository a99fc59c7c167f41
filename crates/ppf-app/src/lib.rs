//! ppf-app - Application state and orchestration for Probepaket Finder
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! search form: the search field slots, app state, messages, the update
//! function, background actions against the backend services, and
//! configuration loading.

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod results;
pub mod search_fields;
pub mod signals;
pub mod state;
pub mod toast;

// Re-export primary types
pub use handler::{UpdateAction, UpdateResult};
pub use message::Message;
pub use results::{PackageCard, SearchResults};
pub use search_fields::{
    ProductChange, RequestToken, SearchFieldManager, SearchFieldSlot, MAX_FIELDS,
};
pub use state::{AppState, Focus, PickerState, PickerTarget, UiMode};
pub use toast::Toast;
