use std::time::Duration;
use tokio::sync::mpsc;

#[derive(Debug)]
enum Signal<T> {
    Trigger(T),
    Cancel,
}

/// Collapses bursts of triggers into a single emission.
///
/// Every `trigger` replaces the pending value and restarts the quiet period;
/// the value is sent on the output channel only once `quiet` has elapsed with
/// no further triggers. `cancel` drops the pending value. Dropping the
/// `Debouncer` stops the background task without emitting.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    tx: mpsc::UnboundedSender<Signal<T>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn spawn(quiet: Duration, out: mpsc::Sender<T>) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            let mut pending: Option<T> = None;

            loop {
                if pending.is_some() {
                    tokio::select! {
                        signal = rx.recv() => match signal {
                            Some(Signal::Trigger(value)) => pending = Some(value),
                            Some(Signal::Cancel) => pending = None,
                            None => break,
                        },
                        () = tokio::time::sleep(quiet) => {
                            if let Some(value) = pending.take() {
                                if out.send(value).await.is_err() {
                                    break;
                                }
                            }
                        }
                    }
                } else {
                    match rx.recv().await {
                        Some(Signal::Trigger(value)) => pending = Some(value),
                        Some(Signal::Cancel) => {}
                        None => break,
                    }
                }
            }
        });

        Self { tx }
    }

    pub fn trigger(&self, value: T) {
        self.signal(Signal::Trigger(value));
    }

    pub fn cancel(&self) {
        self.signal(Signal::Cancel);
    }

    /// Returns false once the background task has stopped.
    fn signal(&self, signal: Signal<T>) -> bool {
        let kind = match signal {
            Signal::Trigger(_) => "trigger",
            Signal::Cancel => "cancel",
        };
        if self.tx.send(signal).is_err() {
            tracing::warn!(kind, "debounce task is gone, dropping signal");
            return false;
        }
        true
    }
}
