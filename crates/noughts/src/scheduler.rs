//! Delayed computer moves.
//!
//! The rules engine has no notion of time. The front end asks the scheduler
//! to raise [`TurnEvent::ComputerMoveDue`] after a pause, then performs the
//! move itself when the event arrives.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, instrument};

/// Messages sent from the scheduler to the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEvent {
    /// The computer's pause is over for the given game generation.
    ComputerMoveDue {
        /// Generation of the game the move was scheduled for.
        generation: u64,
    },
}

/// Schedules at most one pending computer move at a time.
///
/// Dropping the scheduler cancels whatever is pending.
#[derive(Debug)]
pub struct MoveScheduler {
    event_tx: mpsc::UnboundedSender<TurnEvent>,
    pending: Option<JoinHandle<()>>,
}

impl MoveScheduler {
    /// Creates a scheduler that reports on `event_tx`.
    pub fn new(event_tx: mpsc::UnboundedSender<TurnEvent>) -> Self {
        Self {
            event_tx,
            pending: None,
        }
    }

    /// Raises `ComputerMoveDue` after `delay`, replacing any pending move.
    #[instrument(skip(self))]
    pub fn schedule(&mut self, delay: Duration, generation: u64) {
        self.cancel();

        let event_tx = self.event_tx.clone();
        self.pending = Some(tokio::spawn(async move {
            sleep(delay).await;
            if event_tx
                .send(TurnEvent::ComputerMoveDue { generation })
                .is_err()
            {
                debug!("Event receiver dropped before computer move was due");
            }
        }));
        debug!("Computer move scheduled");
    }

    /// Aborts the pending move, if any.
    #[instrument(skip(self))]
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
            debug!("Pending computer move cancelled");
        }
    }

    /// True while a scheduled move has not yet been raised.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for MoveScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{Instant, timeout};

    #[tokio::test(start_paused = true)]
    async fn test_event_raised_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = MoveScheduler::new(tx);
        let start = Instant::now();

        scheduler.schedule(Duration::from_millis(800), 4);

        assert_eq!(rx.recv().await, Some(TurnEvent::ComputerMoveDue { generation: 4 }));
        assert!(start.elapsed() >= Duration::from_millis(800));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_move_never_arrives() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = MoveScheduler::new(tx);

        scheduler.schedule(Duration::from_millis(800), 1);
        scheduler.cancel();

        assert!(!scheduler.is_pending());
        assert!(timeout(Duration::from_secs(5), rx.recv()).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_replaces_pending_move() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = MoveScheduler::new(tx);

        scheduler.schedule(Duration::from_millis(800), 1);
        scheduler.schedule(Duration::from_millis(800), 2);

        assert_eq!(rx.recv().await, Some(TurnEvent::ComputerMoveDue { generation: 2 }));
        assert!(timeout(Duration::from_secs(5), rx.recv()).await.is_err());
    }
}
