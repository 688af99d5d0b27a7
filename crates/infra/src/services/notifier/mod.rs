mod inmemory;
mod webhook;

pub use inmemory::InMemoryNotifier;
pub use webhook::WebhookNotifier;

use serde::Serialize;

/// Named channel that notifications are grouped under
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NotificationChannel {
    pub id: &'static str,
    pub name: &'static str,
}

/// Channel for the live alert shown when a reminder fires
pub const FIRE_CHANNEL: NotificationChannel = NotificationChannel {
    id: "exercise_reminder_channel",
    name: "Exercise Reminders",
};

/// Channel for the generic alert shown by the cleanup work item
pub const CLEANUP_CHANNEL: NotificationChannel = NotificationChannel {
    id: "reminder_channel",
    name: "Reminder Channel",
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub channel: String,
    pub title: String,
    pub body: String,
    pub notification_id: i64,
}

impl Notification {
    pub fn new<T: Into<String>, B: Into<String>>(
        channel: &NotificationChannel,
        title: T,
        body: B,
        notification_id: i64,
    ) -> Self {
        Self {
            channel: channel.id.to_string(),
            title: title.into(),
            body: body.into(),
            notification_id,
        }
    }
}

#[async_trait::async_trait]
pub trait INotifier: Send + Sync {
    /// Presents a user visible alert. Failures are for the caller to log
    /// and discard, a missed notification must never block the rest of
    /// the reminder lifecycle.
    async fn notify(&self, notification: Notification) -> anyhow::Result<()>;
}
