use crate::reminder::{CleanupReminderUseCase, FireReminderUseCase};
use crate::shared::usecase::execute;
use life_reminder_infra::{CleanupJob, ReminderContext};
use std::time::Duration;
use tokio::time::{interval, sleep};
use tracing::{error, warn};

/// How far ahead of each tick the dispatcher collects due alarms, in millis
pub const DISPATCH_INTERVAL_MILLIS: i64 = 1000 * 60;

/// A failed cleanup job is re-enqueued until it has been attempted this
/// many times
const MAX_CLEANUP_ATTEMPTS: u32 = 3;

pub fn secs_to_next_minute(now_millis: i64) -> u64 {
    (60 - (now_millis / 1000) % 60) as u64
}

/// Ticks once a minute, aligned to the minute boundary, and dispatches the
/// alarms that elapse before the next tick
pub fn start_alarm_dispatcher_job(ctx: ReminderContext) {
    tokio::spawn(async move {
        let now = ctx.sys.get_timestamp_millis();
        sleep(Duration::from_secs(secs_to_next_minute(now))).await;

        let mut minutely_interval = interval(Duration::from_secs(60));
        loop {
            minutely_interval.tick().await;
            let context = ctx.clone();
            tokio::spawn(async move {
                dispatch_due_alarms(&context).await;
            });
        }
    });
}

/// Drains every alarm due within the next dispatch interval and fires each
/// one at its exact fire instant
pub async fn dispatch_due_alarms(ctx: &ReminderContext) {
    let now = ctx.sys.get_timestamp_millis();
    let due = ctx.alarms.take_due(now + DISPATCH_INTERVAL_MILLIS).await;
    for alarm in due {
        let context = ctx.clone();
        tokio::spawn(async move {
            let millis_to_fire = alarm.fire_at - context.sys.get_timestamp_millis();
            if millis_to_fire > 0 {
                sleep(Duration::from_millis(millis_to_fire as u64)).await;
            }
            let usecase = FireReminderUseCase {
                payload: alarm.payload,
            };
            let _ = execute(usecase, &context).await;
        });
    }
}

/// Consumes cleanup work items. Failed items are re-enqueued a bounded
/// number of times, which together with the idempotent delete gives the
/// at-least-once execution the fire handler relies on.
pub fn start_cleanup_worker(ctx: ReminderContext) {
    let receiver = ctx.work_queue.take_receiver();
    tokio::spawn(async move {
        let mut receiver = match receiver {
            Some(receiver) => receiver,
            None => {
                warn!("Cleanup work queue receiver was already claimed. Worker not started.");
                return;
            }
        };

        while let Some(job) = receiver.recv().await {
            let usecase = CleanupReminderUseCase {
                reminder_id: job.reminder_id,
            };
            if execute(usecase, &ctx).await.is_err() {
                let attempts = job.attempts + 1;
                if attempts < MAX_CLEANUP_ATTEMPTS {
                    ctx.work_queue.enqueue(CleanupJob { attempts, ..job });
                } else {
                    error!("Dropping cleanup job after {} attempts: {:?}", attempts, job);
                }
            }
        }
    });
}
