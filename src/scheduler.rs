//! Deferred delivery of automated-move tickets.

use crate::session::MoveTicket;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

/// Delivers [`MoveTicket`]s to the event loop after a fixed pause.
///
/// At most one ticket is pending; scheduling another or calling
/// [`cancel`](Self::cancel) aborts the previous one. Tickets that slip through
/// a reset are still rejected by the session's epoch check.
#[derive(Debug)]
pub struct AutomatedMoveScheduler {
    delay: Duration,
    tx: mpsc::UnboundedSender<MoveTicket>,
    pending: Option<JoinHandle<()>>,
}

impl AutomatedMoveScheduler {
    /// Creates a scheduler and the receiver the event loop should poll.
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<MoveTicket>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                delay,
                tx,
                pending: None,
            },
            rx,
        )
    }

    /// Queues `ticket` for delivery after the delay. A zero delay delivers at once.
    #[instrument(skip(self))]
    pub fn schedule(&mut self, ticket: MoveTicket) {
        self.cancel();

        if self.delay.is_zero() {
            if self.tx.send(ticket).is_err() {
                debug!("Event loop gone; dropping ticket");
            }
            return;
        }

        let tx = self.tx.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(ticket).is_err() {
                debug!("Event loop gone; dropping ticket");
            }
        }));
    }

    /// Aborts the pending delivery, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            if !handle.is_finished() {
                debug!("Cancelling pending automated move");
            }
            handle.abort();
        }
    }
}

impl Drop for AutomatedMoveScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
