use super::IReminderRepo;
use crate::repos::shared::repo::DeleteResult;
use life_reminder_domain::{Reminder, TimeOfDay, ID};
use sqlx::{FromRow, SqlitePool};
use tokio::sync::watch;
use tracing::error;

pub struct SqliteReminderRepo {
    pool: SqlitePool,
    snapshot: watch::Sender<Vec<Reminder>>,
    // Held so that the channel stays open while there are no subscribers
    snapshot_rx: watch::Receiver<Vec<Reminder>>,
}

impl SqliteReminderRepo {
    pub fn new(pool: SqlitePool) -> Self {
        let (snapshot, snapshot_rx) = watch::channel(Vec::new());
        Self {
            pool,
            snapshot,
            snapshot_rx,
        }
    }

    async fn all_ordered(&self) -> Vec<Reminder> {
        match sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT id, message, time FROM reminders
            ORDER BY time ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        {
            Ok(reminders) => reminders.into_iter().map(|raw| raw.into()).collect(),
            Err(e) => {
                error!("Unable to fetch reminders: {:?}", e);
                Vec::new()
            }
        }
    }

    async fn publish_snapshot(&self) {
        let _ = self.snapshot.send(self.all_ordered().await);
    }
}

#[derive(Debug, FromRow)]
struct ReminderRaw {
    id: i64,
    message: String,
    time: String,
}

impl From<ReminderRaw> for Reminder {
    fn from(raw: ReminderRaw) -> Self {
        // Rows are only ever written through `TimeOfDay`, so a parse
        // failure means the stored row is corrupt
        let time = raw.time.parse().unwrap_or_else(|e| {
            error!(
                "Reminder: {} has a malformed stored time: {}: {:?}. Falling back to 00:00.",
                raw.id, raw.time, e
            );
            TimeOfDay::default()
        });
        Self {
            id: raw.id.into(),
            message: raw.message,
            time,
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for SqliteReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<ID> {
        let id = if reminder.id.is_unassigned() {
            let res = sqlx::query(
                r#"
                INSERT INTO reminders (message, time)
                VALUES (?, ?)
                "#,
            )
            .bind(&reminder.message)
            .bind(reminder.time.to_string())
            .execute(&self.pool)
            .await?;
            ID::new(res.last_insert_rowid())
        } else {
            sqlx::query(
                r#"
                INSERT INTO reminders (id, message, time)
                VALUES (?, ?, ?)
                "#,
            )
            .bind(reminder.id.inner())
            .bind(&reminder.message)
            .bind(reminder.time.to_string())
            .execute(&self.pool)
            .await?;
            reminder.id
        };
        self.publish_snapshot().await;
        Ok(id)
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT id, message, time FROM reminders
            WHERE id = ?
            "#,
        )
        .bind(reminder_id.inner())
        .fetch_optional(&self.pool)
        .await
        .unwrap_or(None)
        .map(|raw| raw.into())
    }

    async fn find_all(&self) -> Vec<Reminder> {
        self.all_ordered().await
    }

    // TODO: use only one db call
    async fn delete(&self, reminder_id: &ID) -> Option<Reminder> {
        let reminder = self.find(reminder_id).await?;
        let res = sqlx::query(
            r#"
            DELETE FROM reminders
            WHERE id = ?
            "#,
        )
        .bind(reminder_id.inner())
        .execute(&self.pool)
        .await;
        match res {
            Ok(_) => {
                self.publish_snapshot().await;
                Some(reminder)
            }
            Err(e) => {
                error!("Unable to delete reminder: {:?}", e);
                None
            }
        }
    }

    async fn delete_by_id(&self, reminder_id: &ID) -> anyhow::Result<DeleteResult> {
        let res = sqlx::query(
            r#"
            DELETE FROM reminders
            WHERE id = ?
            "#,
        )
        .bind(reminder_id.inner())
        .execute(&self.pool)
        .await?;
        let deleted_count = res.rows_affected() as i64;
        if deleted_count > 0 {
            self.publish_snapshot().await;
        }
        Ok(DeleteResult { deleted_count })
    }

    fn subscribe(&self) -> watch::Receiver<Vec<Reminder>> {
        self.snapshot_rx.clone()
    }
}
