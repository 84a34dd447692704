use crate::app::{
    action::Action, debounce::Debouncer, features::catalog::handle_command,
    input::map_event_to_action, reducer, state::AppState, ui,
};
use crate::domain::catalog::ProductCatalog;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(250);

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
    catalog: Arc<dyn ProductCatalog>,
    quiet_period: Duration,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, catalog, quiet_period, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    catalog: Arc<dyn ProductCatalog>,
    quiet_period: Duration,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);

    // Search debounce: fired terms come back on `due_rx`
    let (due_tx, mut due_rx) = mpsc::channel(8);
    let debouncer = Debouncer::spawn(quiet_period, due_tx);

    tracing::info!(api = %catalog.base_url(), ?quiet_period, "search loop started");

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut app_state);
        })?;

        // --- 2. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = res?;
                map_event_to_action(event, &app_state, terminal.size()?)
            },

            // Debounced search terms
            Some(term) = due_rx.recv() => Some(Action::SearchDue(term)),

            // Async Results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            if let Action::Quit = action {
                break;
            }

            let command = reducer::update(&mut app_state, action);

            if app_state.should_quit {
                break;
            }

            if let Some(cmd) = command {
                handle_command(cmd, catalog.clone(), &debouncer, action_tx.clone());
            }
        }
    }

    tracing::info!("search loop stopped");
    Ok(())
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
