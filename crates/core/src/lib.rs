mod job_schedulers;
mod reminder;
mod shared;

pub use job_schedulers::{
    dispatch_due_alarms, start_alarm_dispatcher_job, start_cleanup_worker,
    DISPATCH_INTERVAL_MILLIS,
};
pub use reminder::{
    CleanupReminderUseCase, CreateReminderRes, CreateReminderUseCase, DeleteReminderUseCase,
    FireReminderUseCase, GetRemindersUseCase, RestoreAlarmsUseCase, CLEANUP_NOTIFICATION_ID,
    FALLBACK_NOTIFICATION_ID,
};
pub use shared::usecase::{execute, UseCase};

use life_reminder_infra::ReminderContext;
use tracing::info;

/// Hosts the reminder lifecycle: restores alarms from the record store and
/// runs the alarm dispatcher and the cleanup worker until shutdown
pub struct Application {
    context: ReminderContext,
}

impl Application {
    pub async fn new(context: ReminderContext) -> anyhow::Result<Self> {
        let restored = execute(RestoreAlarmsUseCase {}, &context)
            .await
            .unwrap_or(0);
        info!("Restored {} alarms from the record store.", restored);

        Application::start_job_schedulers(context.clone());

        Ok(Self { context })
    }

    fn start_job_schedulers(context: ReminderContext) {
        start_alarm_dispatcher_job(context.clone());
        start_cleanup_worker(context);
    }

    pub async fn start(self) -> anyhow::Result<()> {
        let reminders = self.context.repos.reminders.find_all().await;
        info!(
            "Reminder service started with {} stored reminders. Waiting for shutdown signal.",
            reminders.len()
        );
        tokio::signal::ctrl_c().await?;
        info!("Shutdown signal received.");
        Ok(())
    }
}
