//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every backend call runs on its own tokio task and reports back to the
//! TEA loop with a completion or failure message.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use ppf_client::{CatalogService, SearchService};
use ppf_core::Error;

use crate::message::Message;
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action<B>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, backend: Arc<B>)
where
    B: CatalogService + SearchService + Send + Sync + 'static,
{
    match action {
        UpdateAction::LoadProducts => {
            tokio::spawn(async move {
                let msg = match backend.products().await {
                    Ok(catalog) => Message::ProductsLoaded { catalog },
                    Err(e) => {
                        warn!("Loading products failed: {}", e);
                        Message::ProductsLoadFailed {
                            error: e.to_string(),
                        }
                    }
                };
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::LoadColors { token, product } => {
            tokio::spawn(async move {
                let msg = match backend.colors(&product).await {
                    Ok(colors) => Message::ColorsLoaded { token, colors },
                    Err(e) => {
                        warn!("Loading colors for {:?} failed: {}", product, e);
                        Message::ColorsLoadFailed {
                            token,
                            error: e.to_string(),
                        }
                    }
                };
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::RunSearch {
            generation,
            criteria,
            finishing,
        } => {
            tokio::spawn(async move {
                let msg = match backend.search(&criteria, &finishing).await {
                    Ok(outcome) => Message::SearchCompleted {
                        generation,
                        outcome,
                    },
                    Err(e) => {
                        warn!("Search #{} failed: {}", generation, e);
                        Message::SearchFailed {
                            generation,
                            error: e.to_string(),
                        }
                    }
                };
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::Refresh => {
            tokio::spawn(async move {
                let msg = match backend.refresh().await {
                    Ok(last_update) => Message::RefreshCompleted { last_update },
                    Err(e) => {
                        warn!("Refresh failed: {}", e);
                        Message::RefreshFailed {
                            error: e.to_string(),
                        }
                    }
                };
                send(&msg_tx, msg).await;
            });
        }
    }
}

async fn send(msg_tx: &mpsc::Sender<Message>, msg: Message) {
    // Receiver is gone once the runner has shut down
    if let Err(e) = msg_tx
        .send(msg)
        .await
        .map_err(|e| Error::channel_send(e.to_string()))
    {
        debug!("Dropping backend response: {}", e);
    }
}
