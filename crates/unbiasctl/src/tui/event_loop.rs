//! Event Loop - main TUI entry point and event handling

use crate::tui_state::AppState;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use unbias_common::{BiasApi, UnbiasConfig};

use super::input::{handle_key, handle_paste, KeyAction};
use super::render::draw_ui;
use super::runner::{spawn_run, TuiMessage};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Run the TUI until the user quits
pub async fn run(config: &UnbiasConfig, api: Arc<dyn BiasApi>) -> Result<()> {
    enable_raw_mode().context(
        "Failed to enable raw mode. Ensure you're running in a real terminal (TTY).",
    )?;

    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableBracketedPaste) {
        let _ = disable_raw_mode();
        return Err(e).context("Failed to initialize terminal");
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = AppState::new(&config.ui);
    let (tx, mut rx) = mpsc::channel(32);

    tracing::info!(
        analysis = %config.api.analysis_base_url,
        rewrite = %config.api.rewrite_url,
        "TUI started"
    );

    let result = run_event_loop(&mut terminal, &mut state, api, tx, &mut rx).await;

    // Always attempt cleanup
    let cleanup_result = restore_terminal(&mut terminal);

    tracing::info!("TUI stopped");
    result.and(cleanup_result)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    api: Arc<dyn BiasApi>,
    tx: mpsc::Sender<TuiMessage>,
    rx: &mut mpsc::Receiver<TuiMessage>,
) -> Result<()> {
    loop {
        state.tick();

        while let Ok(msg) = rx.try_recv() {
            match msg {
                TuiMessage::RunFinished { ticket, outcome } => {
                    if !state.apply_outcome(&ticket, outcome) {
                        tracing::debug!(view = ?ticket.view, "dropped stale completion");
                    }
                }
            }
        }

        terminal.draw(|f| draw_ui(f, state))?;

        // crossterm polling blocks; keep it off the async workers
        let polled = tokio::task::block_in_place(|| -> io::Result<Option<Event>> {
            if event::poll(POLL_INTERVAL)? {
                event::read().map(Some)
            } else {
                Ok(None)
            }
        })?;

        match polled {
            Some(Event::Key(key)) => match handle_key(state, key) {
                KeyAction::Quit => break,
                KeyAction::Submit => {
                    if let Some(ticket) = state.begin_run() {
                        spawn_run(api.clone(), ticket, tx.clone());
                    }
                }
                KeyAction::None => {}
            },
            Some(Event::Paste(text)) => handle_paste(state, &text),
            _ => {}
        }
    }

    Ok(())
}
