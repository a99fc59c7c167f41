//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `picker`: Option picker popup handlers

pub(crate) mod keys;
pub(crate) mod picker;
pub(crate) mod update;


use ppf_core::{FinishingOption, SearchPair};

use crate::message::Message;
use crate::search_fields::RequestToken;

// Re-export main entry point
pub use update::{
    update, LOAD_COLORS_FAILED, LOAD_PRODUCTS_FAILED, REFRESH_FAILED, REFRESH_STARTED,
    REFRESH_SUCCEEDED, SEARCH_FAILED,
};

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Fetch the product list
    LoadProducts,

    /// Fetch colors for one slot's product
    LoadColors {
        token: RequestToken,
        product: String,
    },

    /// Run a package search
    RunSearch {
        generation: u64,
        criteria: Vec<SearchPair>,
        finishing: Vec<FinishingOption>,
    },

    /// Ask the backend to reload its data
    Refresh,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
