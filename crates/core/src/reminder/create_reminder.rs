use super::next_fire_at;
use crate::shared::usecase::UseCase;
use life_reminder_domain::{Reminder, TimeOfDay};
use life_reminder_infra::{AlarmPayload, ReminderContext};
use tracing::warn;

/// Validates the form input, inserts a new `Reminder` and arms a one-shot
/// alarm for the next occurrence of its time of day, keyed by the id the
/// store assigned. If the insert fails no alarm is armed.
#[derive(Debug)]
pub struct CreateReminderUseCase {
    /// Raw `HH:MM` input from the form time field
    pub time: String,
    /// Raw input from the form message field, blank means "use the default"
    pub message: String,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    /// The time field could not be parsed. Nothing was persisted.
    InvalidTime(String),
    Storage,
    Scheduling,
}

#[derive(Debug)]
pub struct CreateReminderRes {
    pub reminder: Reminder,
    /// False when the exact alarm capability was missing: the record was
    /// persisted but no alarm is armed until the capability is granted
    /// and the alarms are restored
    pub scheduled: bool,
}

#[async_trait::async_trait]
impl UseCase for CreateReminderUseCase {
    type Response = CreateReminderRes;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateReminder";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let time = match self.time.parse::<TimeOfDay>() {
            Ok(time) => time,
            Err(_) => return Err(UseCaseError::InvalidTime(self.time.clone())),
        };

        let mut reminder = Reminder::new(self.message.clone(), time);
        let id = ctx
            .repos
            .reminders
            .insert(&reminder)
            .await
            .map_err(|_| UseCaseError::Storage)?;
        reminder.id = id;

        if !ctx.alarms.can_schedule_exact() {
            warn!(
                "Exact alarms are not permitted. Reminder: {} stays persisted but unscheduled.",
                reminder.id
            );
            ctx.alarms.request_exact_capability();
            return Ok(CreateReminderRes {
                reminder,
                scheduled: false,
            });
        }

        let fire_at = next_fire_at(&reminder.time, &*ctx.sys);
        let payload = AlarmPayload {
            reminder_id: Some(reminder.id),
            message: reminder.message.clone(),
        };
        ctx.alarms
            .arm(&reminder.id, fire_at, payload)
            .await
            .map_err(|_| UseCaseError::Scheduling)?;

        Ok(CreateReminderRes {
            reminder,
            scheduled: true,
        })
    }
}
