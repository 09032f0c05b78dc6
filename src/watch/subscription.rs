use tokio::sync::oneshot::error::TryRecvError;
use tokio::sync::{mpsc, oneshot};

use super::ChangeEvent;

/// Consumer half: a stream of change events that can be cancelled.
pub struct Subscription {
    events: mpsc::Receiver<ChangeEvent>,
    cancel: Option<oneshot::Sender<()>>,
}

/// Producer half, held by the watcher implementation.
pub struct Publisher {
    events: mpsc::Sender<ChangeEvent>,
    cancelled: oneshot::Receiver<()>,
}

impl Subscription {
    /// A connected pair holding up to `buffer` undelivered events (at least one).
    pub fn channel(buffer: usize) -> (Subscription, Publisher) {
        let (events_tx, events_rx) = mpsc::channel(buffer.max(1));
        let (cancel_tx, cancel_rx) = oneshot::channel();

        (
            Subscription {
                events: events_rx,
                cancel: Some(cancel_tx),
            },
            Publisher {
                events: events_tx,
                cancelled: cancel_rx,
            },
        )
    }

    /// A subscription that yields nothing.
    pub fn closed() -> Self {
        let (subscription, _publisher) = Self::channel(1);
        subscription
    }

    /// Next change, or `None` once the watcher has stopped.
    pub async fn next(&mut self) -> Option<ChangeEvent> {
        self.events.recv().await
    }

    /// Ask the watcher to stop.
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            let _ = cancel.send(());
        }
    }
}

impl Publisher {
    /// Returns false once the subscription is gone.
    pub async fn publish(&self, event: ChangeEvent) -> bool {
        self.events.send(event).await.is_ok()
    }

    /// Resolves when the subscription is cancelled or dropped.
    pub async fn cancelled(&mut self) {
        if self.is_cancelled() {
            return;
        }
        let _ = (&mut self.cancelled).await;
    }

    pub fn is_cancelled(&mut self) -> bool {
        !matches!(self.cancelled.try_recv(), Err(TryRecvError::Empty))
    }
}
