use crate::shared::entity::{Entity, ID};
use crate::time_of_day::TimeOfDay;
use serde::{Deserialize, Serialize};

/// Message used when a `Reminder` is created with a blank message.
pub const DEFAULT_REMINDER_MESSAGE: &str = "Time to exercise!";

/// A `Reminder` is a message that should be shown to the user as a
/// notification at the next occurrence of `time`.
///
/// Every reminder fires at most once: it lives in the record store from
/// insertion until the user deletes it or the fire-then-cleanup chain
/// removes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    /// Assigned by the record store on insertion, also used as the alarm
    /// token and the notification id for this reminder
    pub id: ID,
    /// Free-text label shown in the notification
    pub message: String,
    /// Time of day at which the reminder fires
    pub time: TimeOfDay,
}

impl Reminder {
    pub fn new<M: Into<String>>(message: M, time: TimeOfDay) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            DEFAULT_REMINDER_MESSAGE.to_string()
        } else {
            message
        };
        Self {
            id: Default::default(),
            message,
            time,
        }
    }
}

impl Entity<ID> for Reminder {
    fn id(&self) -> ID {
        self.id
    }
}
