mod config;
mod repos;
mod services;
mod system;

pub use config::Config;
pub use repos::{DeleteResult, IReminderRepo, Repos};
pub use services::*;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
pub use system::ISys;
use system::RealSys;

/// Shared handle to every platform service the reminder lifecycle needs:
/// the record store, the alarm scheduler, the notification presenter and
/// the deferred work queue.
///
/// Cheap to clone. Entry points that can run after a process restart (the
/// alarm dispatcher and the cleanup worker) receive their own clone instead
/// of relying on any other in-memory state.
#[derive(Clone)]
pub struct ReminderContext {
    pub repos: Repos,
    pub alarms: Arc<dyn IAlarmScheduler>,
    pub notifier: Arc<dyn INotifier>,
    pub work_queue: WorkQueue,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

struct ContextParams {
    pub sqlite_connection_string: String,
}

impl ReminderContext {
    async fn create(params: ContextParams, config: Config) -> Self {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&params.sqlite_connection_string)
            .await
            .expect("Sqlite connection string must be set and valid");
        sqlx::migrate!()
            .run(&pool)
            .await
            .expect("Sqlite migrations should run");
        Self {
            repos: Repos::create_sqlite(pool),
            alarms: Arc::new(InProcessAlarmScheduler::new(config.exact_alarms_allowed)),
            notifier: Arc::new(WebhookNotifier::new(config.notify_webhook_url.clone())),
            work_queue: WorkQueue::new(),
            sys: Arc::new(RealSys::new(config.timezone)),
            config,
        }
    }

    /// Context backed entirely by in-memory services, for tests
    pub fn create_inmemory() -> Self {
        let config = Config::new();
        Self {
            repos: Repos::create_inmemory(),
            alarms: Arc::new(InProcessAlarmScheduler::new(true)),
            notifier: Arc::new(InMemoryNotifier::new()),
            work_queue: WorkQueue::new(),
            config,
            sys: Arc::new(RealSys::new(chrono_tz::UTC)),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> ReminderContext {
    let config = Config::new();
    ReminderContext::create(
        ContextParams {
            sqlite_connection_string: config.database_url.clone(),
        },
        config,
    )
    .await
}
