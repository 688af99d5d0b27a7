mod reminder;
mod shared;

pub use reminder::IReminderRepo;
use reminder::{InMemoryReminderRepo, SqliteReminderRepo};
pub use shared::repo::DeleteResult;
use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone)]
pub struct Repos {
    pub reminders: Arc<dyn IReminderRepo>,
}

impl Repos {
    pub fn create_sqlite(pool: SqlitePool) -> Self {
        Self {
            reminders: Arc::new(SqliteReminderRepo::new(pool)),
        }
    }

    pub fn create_inmemory() -> Self {
        Self {
            reminders: Arc::new(InMemoryReminderRepo::new()),
        }
    }
}
