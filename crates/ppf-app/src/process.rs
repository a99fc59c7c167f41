//! Message processing loop
//!
//! Feeds a message through the TEA update function, dispatching actions and
//! following up on chained messages until the chain ends.

use std::sync::Arc;

use tokio::sync::mpsc;

use ppf_client::{CatalogService, SearchService};

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<B>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    backend: &Arc<B>,
) where
    B: CatalogService + SearchService + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), Arc::clone(backend));
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
