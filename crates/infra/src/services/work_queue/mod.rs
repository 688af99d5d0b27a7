use life_reminder_domain::ID;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tracing::error;

/// Input of the deferred work item that deletes a fired reminder from the
/// record store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanupJob {
    /// `None` models a work item that was enqueued without a record id
    pub reminder_id: Option<ID>,
    /// How many times this job has already been attempted
    pub attempts: u32,
}

impl CleanupJob {
    pub fn new(reminder_id: ID) -> Self {
        Self {
            reminder_id: Some(reminder_id),
            attempts: 0,
        }
    }
}

/// Hand-off queue between the alarm fire handler and the cleanup worker.
///
/// The fire handler runs in a context unsuitable for store writes, so it
/// only enqueues here. Execution is at-least-once: the worker re-enqueues
/// failed jobs, which is why the cleanup work item is idempotent.
#[derive(Clone)]
pub struct WorkQueue {
    tx: mpsc::UnboundedSender<CleanupJob>,
    rx: Arc<Mutex<Option<mpsc::UnboundedReceiver<CleanupJob>>>>,
}

impl WorkQueue {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx: Arc::new(Mutex::new(Some(rx))),
        }
    }

    pub fn enqueue(&self, job: CleanupJob) {
        if self.tx.send(job).is_err() {
            error!("Cleanup work queue is closed. Dropping job.");
        }
    }

    /// The receiving end can be claimed exactly once, by the cleanup worker
    pub fn take_receiver(&self) -> Option<mpsc::UnboundedReceiver<CleanupJob>> {
        self.rx.lock().unwrap().take()
    }
}

impl Default for WorkQueue {
    fn default() -> Self {
        Self::new()
    }
}
