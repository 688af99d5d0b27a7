mod alarm;
mod notifier;
mod work_queue;

pub use alarm::{AlarmPayload, ArmedAlarm, IAlarmScheduler, InProcessAlarmScheduler};
pub use notifier::{
    INotifier, InMemoryNotifier, Notification, NotificationChannel, WebhookNotifier, CLEANUP_CHANNEL,
    FIRE_CHANNEL,
};
pub use work_queue::{CleanupJob, WorkQueue};
