use super::next_fire_at;
use crate::shared::usecase::UseCase;
use life_reminder_infra::{AlarmPayload, ReminderContext};
use tracing::warn;

/// Re-arms an alarm for every persisted reminder at its next occurrence.
///
/// Runs at startup: armed alarms do not survive a process restart, and a
/// reminder created while the exact alarm capability was denied is picked
/// up here once the capability has been granted.
#[derive(Debug)]
pub struct RestoreAlarmsUseCase {}

#[derive(Debug)]
pub enum UseCaseError {}

#[async_trait::async_trait]
impl UseCase for RestoreAlarmsUseCase {
    type Response = usize;

    type Error = UseCaseError;

    const NAME: &'static str = "RestoreAlarms";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        if !ctx.alarms.can_schedule_exact() {
            warn!("Exact alarms are not permitted. No alarms restored.");
            ctx.alarms.request_exact_capability();
            return Ok(0);
        }

        let mut armed = 0;
        for reminder in ctx.repos.reminders.find_all().await {
            let payload = AlarmPayload {
                reminder_id: Some(reminder.id),
                message: reminder.message.clone(),
            };
            match ctx
                .alarms
                .arm(&reminder.id, next_fire_at(&reminder.time, &*ctx.sys), payload)
                .await
            {
                Ok(_) => armed += 1,
                Err(e) => warn!(
                    "Unable to restore alarm for reminder: {}: {:?}",
                    reminder.id, e
                ),
            }
        }

        Ok(armed)
    }
}
