use super::IReminderRepo;
use crate::repos::shared::{inmemory_repo::*, repo::DeleteResult};
use life_reminder_domain::{Reminder, ID};
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::watch;

pub struct InMemoryReminderRepo {
    reminders: std::sync::Mutex<Vec<Reminder>>,
    next_id: AtomicI64,
    snapshot: watch::Sender<Vec<Reminder>>,
    // Held so that the channel stays open while there are no subscribers
    snapshot_rx: watch::Receiver<Vec<Reminder>>,
}

impl InMemoryReminderRepo {
    pub fn new() -> Self {
        let (snapshot, snapshot_rx) = watch::channel(Vec::new());
        Self {
            reminders: std::sync::Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            snapshot,
            snapshot_rx,
        }
    }

    fn all_ordered(&self) -> Vec<Reminder> {
        let mut reminders = find_by(&self.reminders, |_| true);
        // `TimeOfDay` orders the same way as its zero-padded rendering
        reminders.sort_by_key(|reminder| reminder.time);
        reminders
    }

    fn publish_snapshot(&self) {
        let _ = self.snapshot.send(self.all_ordered());
    }
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<ID> {
        let mut reminder = reminder.clone();
        if reminder.id.is_unassigned() {
            reminder.id = ID::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        }
        let id = reminder.id;
        insert(&reminder, &self.reminders);
        self.publish_snapshot();
        Ok(id)
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        find(reminder_id, &self.reminders)
    }

    async fn find_all(&self) -> Vec<Reminder> {
        self.all_ordered()
    }

    async fn delete(&self, reminder_id: &ID) -> Option<Reminder> {
        let deleted = delete(reminder_id, &self.reminders);
        if deleted.is_some() {
            self.publish_snapshot();
        }
        deleted
    }

    async fn delete_by_id(&self, reminder_id: &ID) -> anyhow::Result<DeleteResult> {
        let deleted_count = match delete(reminder_id, &self.reminders) {
            Some(_) => {
                self.publish_snapshot();
                1
            }
            None => 0,
        };
        Ok(DeleteResult { deleted_count })
    }

    fn subscribe(&self) -> watch::Receiver<Vec<Reminder>> {
        self.snapshot_rx.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reminder_factory(message: &str, time: &str) -> Reminder {
        Reminder::new(message, time.parse().expect("Valid time of day"))
    }

    #[tokio::test]
    async fn assigns_increasing_ids_on_insert() {
        let repo = InMemoryReminderRepo::new();
        let first = repo
            .insert(&reminder_factory("Stretch", "07:30"))
            .await
            .unwrap();
        let second = repo
            .insert(&reminder_factory("Run", "18:00"))
            .await
            .unwrap();
        assert!(!first.is_unassigned());
        assert!(second > first);
    }

    #[tokio::test]
    async fn orders_reminders_by_time() {
        let repo = InMemoryReminderRepo::new();
        repo.insert(&reminder_factory("Evening", "18:00"))
            .await
            .unwrap();
        repo.insert(&reminder_factory("Morning", "07:30"))
            .await
            .unwrap();
        repo.insert(&reminder_factory("Noon", "12:00")).await.unwrap();

        let all = repo.find_all().await;
        let times = all
            .iter()
            .map(|reminder| reminder.time.to_string())
            .collect::<Vec<_>>();
        assert_eq!(times, vec!["07:30", "12:00", "18:00"]);
    }

    #[tokio::test]
    async fn delete_by_id_is_idempotent() {
        let repo = InMemoryReminderRepo::new();
        let id = repo
            .insert(&reminder_factory("Stretch", "07:30"))
            .await
            .unwrap();

        let first = repo.delete_by_id(&id).await.unwrap();
        assert_eq!(first.deleted_count, 1);

        let second = repo.delete_by_id(&id).await.unwrap();
        assert_eq!(second.deleted_count, 0);
    }

    #[tokio::test]
    async fn subscription_emits_snapshot_on_every_mutation() {
        let repo = InMemoryReminderRepo::new();
        let mut subscription = repo.subscribe();
        assert!(subscription.borrow().is_empty());

        let id = repo
            .insert(&reminder_factory("Stretch", "07:30"))
            .await
            .unwrap();
        subscription.changed().await.unwrap();
        assert_eq!(subscription.borrow().len(), 1);

        repo.delete(&id).await.unwrap();
        subscription.changed().await.unwrap();
        assert!(subscription.borrow().is_empty());
    }
}
