mod inmemory;
mod sqlite;

pub use inmemory::InMemoryReminderRepo;
pub use sqlite::SqliteReminderRepo;

use crate::repos::shared::repo::DeleteResult;
use life_reminder_domain::{Reminder, ID};
use tokio::sync::watch;

#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    /// Inserts the reminder and returns the id assigned by the store.
    /// A reminder with an unassigned id gets a fresh one; a reminder that
    /// already carries an id keeps it.
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<ID>;
    async fn find(&self, reminder_id: &ID) -> Option<Reminder>;
    /// All reminders, ordered ascending by their `HH:MM` time string
    async fn find_all(&self) -> Vec<Reminder>;
    /// Deletes and returns the reminder, or `None` when it does not exist
    async fn delete(&self, reminder_id: &ID) -> Option<Reminder>;
    /// Idempotent delete: removing an id that no longer exists is not an
    /// error, the result just reports a count of zero
    async fn delete_by_id(&self, reminder_id: &ID) -> anyhow::Result<DeleteResult>;
    /// Live subscription over the store: a new ordered snapshot is emitted
    /// after every insert or delete. Restartable, one emission per mutation.
    fn subscribe(&self) -> watch::Receiver<Vec<Reminder>>;
}
