use crate::shared::usecase::UseCase;
use life_reminder_domain::{Reminder, ID};
use life_reminder_infra::ReminderContext;

/// Removes a `Reminder` from the store and cancels the alarm armed under
/// its id, so the former alarm token can never fire afterwards
#[derive(Debug)]
pub struct DeleteReminderUseCase {
    pub reminder_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
}

#[async_trait::async_trait]
impl UseCase for DeleteReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteReminder";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.reminders.delete(&self.reminder_id).await {
            Some(reminder) => {
                ctx.alarms.cancel(&self.reminder_id).await;
                Ok(reminder)
            }
            None => Err(UseCaseError::NotFound(self.reminder_id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reminder::CreateReminderUseCase;
    use crate::shared::usecase::execute;
    use life_reminder_infra::InProcessAlarmScheduler;
    use std::sync::Arc;

    fn setup() -> (ReminderContext, Arc<InProcessAlarmScheduler>) {
        let mut ctx = ReminderContext::create_inmemory();
        let alarms = Arc::new(InProcessAlarmScheduler::new(true));
        ctx.alarms = alarms.clone();
        (ctx, alarms)
    }

    #[tokio::test]
    async fn deletes_record_and_cancels_its_alarm() {
        let (ctx, alarms) = setup();

        let create = CreateReminderUseCase {
            time: "07:30".into(),
            message: "Stretch".into(),
        };
        let created = execute(create, &ctx).await.expect("To create reminder");
        assert_eq!(alarms.armed().len(), 1);

        let mut usecase = DeleteReminderUseCase {
            reminder_id: created.reminder.id,
        };
        let deleted = usecase.execute(&ctx).await.expect("To delete reminder");
        assert_eq!(deleted, created.reminder);

        assert!(ctx.repos.reminders.find_all().await.is_empty());
        assert!(alarms.armed().is_empty());
    }

    #[tokio::test]
    async fn rejects_unknown_reminder_id() {
        let (ctx, _) = setup();

        let mut usecase = DeleteReminderUseCase {
            reminder_id: ID::new(42),
        };
        let res = usecase.execute(&ctx).await;
        assert_eq!(res.unwrap_err(), UseCaseError::NotFound(ID::new(42)));
    }
}
