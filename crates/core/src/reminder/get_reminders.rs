use crate::shared::usecase::UseCase;
use life_reminder_domain::Reminder;
use life_reminder_infra::ReminderContext;

/// Snapshot of every stored reminder, ordered ascending by time of day.
/// Front ends that want continuous updates subscribe to the store instead
/// through `ctx.repos.reminders.subscribe()`.
#[derive(Debug)]
pub struct GetRemindersUseCase {}

#[derive(Debug)]
pub enum UseCaseError {}

#[async_trait::async_trait]
impl UseCase for GetRemindersUseCase {
    type Response = Vec<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetReminders";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        Ok(ctx.repos.reminders.find_all().await)
    }
}
