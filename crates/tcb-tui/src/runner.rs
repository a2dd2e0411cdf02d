//! Main TUI runner: terminal lifecycle and the event loop

use tokio::sync::mpsc;

use tcb_app::message::Message;
use tcb_app::process;
use tcb_app::signals;
use tcb_app::state::AppState;
use tcb_app::Clipboard;
use tcb_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI until the user quits
pub async fn run<C>(mut state: AppState, clipboard: C) -> Result<()>
where
    C: Clipboard + Clone + Sync + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::init();

    // Clipboard results and signals arrive here
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(64);
    signals::spawn_signal_handler(msg_tx.clone());

    info!(
        "Starting TUI with {} test case(s), {} parameter(s)",
        state.document.records.len(),
        state.document.params.len()
    );

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &clipboard);

    ratatui::restore();
    info!("TUI stopped");
    result
}

/// Main event loop
fn run_loop<C>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    clipboard: &C,
) -> Result<()>
where
    C: Clipboard + Clone + Sync + 'static,
{
    while !state.should_quit() {
        // Process messages from background tasks
        while let Ok(msg) = msg_rx.try_recv() {
            process::process_message(state, msg, &msg_tx, clipboard);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process::process_message(state, message, &msg_tx, clipboard);
        }
    }

    Ok(())
}
