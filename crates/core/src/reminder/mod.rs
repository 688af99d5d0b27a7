mod cleanup_reminder;
mod create_reminder;
mod delete_reminder;
mod fire_reminder;
mod get_reminders;
mod restore_alarms;

pub use cleanup_reminder::{CleanupReminderUseCase, CLEANUP_NOTIFICATION_ID};
pub use create_reminder::{CreateReminderRes, CreateReminderUseCase};
pub use delete_reminder::DeleteReminderUseCase;
pub use fire_reminder::{FireReminderUseCase, FALLBACK_NOTIFICATION_ID};
pub use get_reminders::GetRemindersUseCase;
pub use restore_alarms::RestoreAlarmsUseCase;

use chrono::TimeZone;
use life_reminder_domain::TimeOfDay;
use life_reminder_infra::ISys;

/// Fire instant in epoch millis for the next occurrence of `time`,
/// relative to the clock's current instant in its configured calendar
pub(crate) fn next_fire_at(time: &TimeOfDay, sys: &dyn ISys) -> i64 {
    let now = sys.get_timezone().timestamp_millis(sys.get_timestamp_millis());
    time.next_occurrence(&now).timestamp_millis()
}
