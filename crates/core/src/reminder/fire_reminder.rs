use crate::shared::usecase::UseCase;
use life_reminder_infra::{
    AlarmPayload, CleanupJob, Notification, ReminderContext, FIRE_CHANNEL,
};
use tracing::warn;

/// Notification id used when an alarm fires without an attached reminder id
pub const FALLBACK_NOTIFICATION_ID: i64 = 1;

/// Handler for an elapsed alarm: shows the live notification and hands the
/// record deletion off to the deferred work queue. The handler itself runs
/// in a constrained context and never writes to the store.
#[derive(Debug)]
pub struct FireReminderUseCase {
    pub payload: AlarmPayload,
}

#[derive(Debug)]
pub enum UseCaseError {}

#[async_trait::async_trait]
impl UseCase for FireReminderUseCase {
    type Response = ();

    type Error = UseCaseError;

    const NAME: &'static str = "FireReminder";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let notification_id = self
            .payload
            .reminder_id
            .map(|id| id.inner())
            .unwrap_or(FALLBACK_NOTIFICATION_ID);
        let notification = Notification::new(
            &FIRE_CHANNEL,
            "Exercise Reminder",
            self.payload.message.clone(),
            notification_id,
        );
        // A missed notification must never block the cleanup of the record
        if let Err(e) = ctx.notifier.notify(notification).await {
            warn!("Unable to display reminder notification: {:?}", e);
        }

        match self.payload.reminder_id {
            Some(reminder_id) => ctx.work_queue.enqueue(CleanupJob::new(reminder_id)),
            None => warn!("Alarm fired without an attached reminder id. Nothing to clean up."),
        }

        Ok(())
    }
}
