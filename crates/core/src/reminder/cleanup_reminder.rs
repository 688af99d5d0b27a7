use crate::shared::usecase::UseCase;
use life_reminder_domain::{DEFAULT_REMINDER_MESSAGE, ID};
use life_reminder_infra::{Notification, ReminderContext, CLEANUP_CHANNEL};
use tracing::warn;

/// Fixed notification id for the generic alert shown by the cleanup step
pub const CLEANUP_NOTIFICATION_ID: i64 = 1001;

/// Deferred work item that removes a fired reminder from the store.
///
/// Runs at-least-once and possibly after a process restart, so it only
/// relies on the context it is handed and deletion is idempotent.
#[derive(Debug)]
pub struct CleanupReminderUseCase {
    pub reminder_id: Option<ID>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    /// The work item was enqueued without a record id. Reported as a
    /// failure with no partial side effects.
    MissingReminderId,
    Storage,
}

#[async_trait::async_trait]
impl UseCase for CleanupReminderUseCase {
    type Response = ();

    type Error = UseCaseError;

    const NAME: &'static str = "CleanupReminder";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let reminder_id = match self.reminder_id {
            Some(reminder_id) => reminder_id,
            None => return Err(UseCaseError::MissingReminderId),
        };

        let notification = Notification::new(
            &CLEANUP_CHANNEL,
            "Reminder",
            DEFAULT_REMINDER_MESSAGE,
            CLEANUP_NOTIFICATION_ID,
        );
        // The record is deleted regardless of whether the alert displayed
        if let Err(e) = ctx.notifier.notify(notification).await {
            warn!("Unable to display cleanup notification: {:?}", e);
        }

        ctx.repos
            .reminders
            .delete_by_id(&reminder_id)
            .await
            .map_err(|_| UseCaseError::Storage)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_reminder_domain::Reminder;

    async fn insert_reminder(ctx: &ReminderContext) -> ID {
        let reminder = Reminder::new("Stretch", "07:30".parse().expect("Valid time of day"));
        ctx.repos
            .reminders
            .insert(&reminder)
            .await
            .expect("To insert reminder")
    }

    #[tokio::test]
    async fn deletes_the_reminder_by_id() {
        let ctx = ReminderContext::create_inmemory();
        let id = insert_reminder(&ctx).await;

        let mut usecase = CleanupReminderUseCase {
            reminder_id: Some(id),
        };
        usecase.execute(&ctx).await.expect("To clean up");

        assert!(ctx.repos.reminders.find_all().await.is_empty());
    }

    #[tokio::test]
    async fn cleanup_is_idempotent() {
        let ctx = ReminderContext::create_inmemory();
        let id = insert_reminder(&ctx).await;

        let mut usecase = CleanupReminderUseCase {
            reminder_id: Some(id),
        };
        usecase.execute(&ctx).await.expect("First run succeeds");

        // A second delivery of the same work item is a no-op, not an error
        let mut usecase = CleanupReminderUseCase {
            reminder_id: Some(id),
        };
        usecase.execute(&ctx).await.expect("Second run succeeds");
    }

    #[tokio::test]
    async fn missing_reminder_id_fails_without_side_effects() {
        let ctx = ReminderContext::create_inmemory();
        let id = insert_reminder(&ctx).await;

        let mut usecase = CleanupReminderUseCase { reminder_id: None };
        let res = usecase.execute(&ctx).await;
        assert_eq!(res.unwrap_err(), UseCaseError::MissingReminderId);

        assert!(ctx.repos.reminders.find(&id).await.is_some());
    }
}
