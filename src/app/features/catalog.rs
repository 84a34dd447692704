use crate::app::{action::Action, command::Command, debounce::Debouncer};
use crate::domain::catalog::ProductCatalog;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Runs a reducer command. Network work is spawned; results come back as
/// actions on `tx`. In-flight requests are never cancelled.
pub fn handle_command(
    command: Command,
    catalog: Arc<dyn ProductCatalog>,
    debouncer: &Debouncer<String>,
    tx: mpsc::Sender<Action>,
) {
    match command {
        Command::ScheduleSearch(term) => debouncer.trigger(term),
        Command::CancelSearch => debouncer.cancel(),
        Command::FetchSuggestions(term) => {
            tokio::spawn(async move {
                let action = match catalog.search(&term).await {
                    Ok(items) => Action::SuggestionsLoaded { term, items },
                    Err(e) => Action::SearchFailed {
                        term,
                        error: e.to_string(),
                    },
                };
                let _ = tx.send(action).await;
            });
        }
        Command::LoadProduct(id) => {
            debouncer.cancel();
            tokio::spawn(async move {
                let action = match catalog.product(&id).await {
                    Ok(detail) => Action::ProductLoaded(Box::new(detail)),
                    Err(e) => Action::ProductFailed {
                        id,
                        error: e.to_string(),
                    },
                };
                let _ = tx.send(action).await;
            });
        }
    }
}
