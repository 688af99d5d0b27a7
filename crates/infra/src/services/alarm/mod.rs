mod inprocess;

pub use inprocess::InProcessAlarmScheduler;

use life_reminder_domain::ID;
use serde::{Deserialize, Serialize};

/// Data attached to an alarm when it is armed and handed back to the fire
/// handler when the alarm elapses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlarmPayload {
    /// The `Reminder` this alarm belongs to. `None` models a trigger that
    /// arrived without an attached record id.
    pub reminder_id: Option<ID>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArmedAlarm {
    /// Caller supplied token, equal to the reminder id
    pub token: ID,
    /// Absolute fire instant in epoch millis
    pub fire_at: i64,
    pub payload: AlarmPayload,
}

#[async_trait::async_trait]
pub trait IAlarmScheduler: Send + Sync {
    /// Arms a one-shot, wall-clock trigger under `token`. Arming a token
    /// that already has an alarm replaces the earlier one, so a reminder
    /// can never have two live alarms.
    async fn arm(&self, token: &ID, fire_at: i64, payload: AlarmPayload) -> anyhow::Result<()>;
    /// Cancels the alarm armed under `token`. Cancelling an unarmed token
    /// is a no-op, not an error.
    async fn cancel(&self, token: &ID);
    /// Removes and returns every armed alarm with `fire_at <= horizon`,
    /// ordered by fire instant
    async fn take_due(&self, horizon: i64) -> Vec<ArmedAlarm>;
    /// Whether the platform currently permits exact wall-clock alarms
    fn can_schedule_exact(&self) -> bool;
    /// Redirect the user towards granting the exact alarm capability
    fn request_exact_capability(&self);
}
