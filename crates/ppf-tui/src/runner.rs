//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use tokio::sync::mpsc;

use ppf_app::config::Settings;
use ppf_app::{process, signals, AppState, Message};
use ppf_client::{CatalogService, SearchService};
use ppf_core::prelude::*;

use crate::{event, render, terminal};

/// Run the interactive finder against `backend` until the user quits.
pub async fn run<B>(settings: Settings, backend: Arc<B>) -> Result<()>
where
    B: CatalogService + SearchService + Send + Sync + 'static,
{
    terminal::install_panic_hook();
    info!("Starting TUI against {}", settings.backend.base_url);

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    let mut state = AppState::new(settings);

    // Background tasks and the signal handler report through this channel
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    signals::spawn_signal_handler(msg_tx.clone());

    process::process_message(&mut state, Message::Initialize, &msg_tx, &backend);

    let result = run_loop(&mut term, &mut state, msg_rx, &msg_tx, &backend);

    ratatui::restore();
    if let Err(e) = &result {
        error!("TUI loop ended with error: {}", e);
    }
    result
}

/// Main event loop
fn run_loop<B>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: &mpsc::Sender<Message>,
    backend: &Arc<B>,
) -> Result<()>
where
    B: CatalogService + SearchService + Send + Sync + 'static,
{
    while !state.should_quit() {
        // Backend responses, signals
        while let Ok(msg) = msg_rx.try_recv() {
            process::process_message(state, msg, msg_tx, backend);
        }

        terminal
            .draw(|frame| render::view(frame, state))
            .context("Drawing frame")?;

        if let Some(message) = event::poll()? {
            process::process_message(state, message, msg_tx, backend);
        }
    }

    Ok(())
}
