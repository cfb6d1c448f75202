//! Request runner - executes a view's run off the UI loop

use crate::tui_state::{RunOutcome, RunTicket, Tab};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use unbias_common::{run_analysis, run_rewrite, BiasApi};

/// Messages delivered back into the event loop
#[derive(Debug)]
pub enum TuiMessage {
    RunFinished {
        ticket: RunTicket,
        outcome: RunOutcome,
    },
}

/// Execute the request chain for `ticket`
pub async fn execute(api: &dyn BiasApi, ticket: &RunTicket) -> RunOutcome {
    let req_id = uuid::Uuid::new_v4();
    let started = Instant::now();
    tracing::info!(%req_id, view = ?ticket.view, mode = %ticket.mode, "run started");

    let outcome = match ticket.view {
        Tab::Analyze => RunOutcome::Analysis(run_analysis(api, ticket.mode, &ticket.input).await),
        Tab::Rewrite => RunOutcome::Rewrite(run_rewrite(api, &ticket.input).await),
    };

    let ok = match &outcome {
        RunOutcome::Analysis(result) => result.is_ok(),
        RunOutcome::Rewrite(result) => result.is_ok(),
    };
    tracing::info!(
        %req_id,
        ok,
        duration_ms = started.elapsed().as_millis() as u64,
        "run finished"
    );

    outcome
}

/// Spawn the run and report back over `tx`
pub fn spawn_run(api: Arc<dyn BiasApi>, ticket: RunTicket, tx: mpsc::Sender<TuiMessage>) {
    tokio::spawn(async move {
        let outcome = execute(api.as_ref(), &ticket).await;
        // Receiver gone means the TUI already exited
        let _ = tx.send(TuiMessage::RunFinished { ticket, outcome }).await;
    });
}
