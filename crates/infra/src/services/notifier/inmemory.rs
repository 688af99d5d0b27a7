use super::{INotifier, Notification};
use std::sync::Mutex;

/// Records every notification instead of displaying it, for tests
pub struct InMemoryNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self {
            notifications: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }
}

impl Default for InMemoryNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl INotifier for InMemoryNotifier {
    async fn notify(&self, notification: Notification) -> anyhow::Result<()> {
        let mut notifications = self.notifications.lock().unwrap();
        notifications.push(notification);
        Ok(())
    }
}
