mod helpers;

use chrono::Duration;
use helpers::setup;
use life_reminder_core::{
    execute, CleanupReminderUseCase, CreateReminderUseCase, DeleteReminderUseCase,
    FireReminderUseCase, GetRemindersUseCase, CLEANUP_NOTIFICATION_ID,
};
use life_reminder_domain::DEFAULT_REMINDER_MESSAGE;
use life_reminder_infra::{IAlarmScheduler, CLEANUP_CHANNEL, FIRE_CHANNEL};

// Wed Sep 01 2021 ~ 17:46 UTC
const START_MILLIS: i64 = 1_630_518_400_000;

#[tokio::test]
async fn reminder_fires_at_its_time_and_is_cleaned_up() {
    let app = setup(START_MILLIS);

    let usecase = CreateReminderUseCase {
        time: "07:30".into(),
        message: "Stretch".into(),
    };
    let created = execute(usecase, &app.ctx)
        .await
        .expect("To create reminder");
    assert!(created.scheduled);
    let reminder = created.reminder;

    // The record shows up in the live list
    let listed = execute(GetRemindersUseCase {}, &app.ctx)
        .await
        .expect("To list reminders");
    assert_eq!(listed, vec![reminder.clone()]);

    // The alarm is armed at the next occurrence of 07:30, within a day
    let armed = app.alarms.armed();
    assert_eq!(armed.len(), 1);
    let alarm = armed[0].clone();
    assert_eq!(alarm.token, reminder.id);
    assert!(alarm.fire_at > START_MILLIS);
    assert!(alarm.fire_at - START_MILLIS <= Duration::days(1).num_milliseconds());

    // Time passes until the fire instant
    app.clock.set(alarm.fire_at);
    let due = app.alarms.take_due(app.clock.now()).await;
    assert_eq!(due.len(), 1);

    let mut cleanup_jobs = app.ctx.work_queue.take_receiver().expect("First claim");
    for alarm in due {
        let usecase = FireReminderUseCase {
            payload: alarm.payload,
        };
        execute(usecase, &app.ctx).await.expect("To fire reminder");
    }

    // The live alert was presented under the reminder's id
    let sent = app.notifier.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].channel, FIRE_CHANNEL.id);
    assert_eq!(sent[0].title, "Exercise Reminder");
    assert_eq!(sent[0].body, "Stretch");
    assert_eq!(sent[0].notification_id, reminder.id.inner());

    // The deferred work item deletes the record
    let job = cleanup_jobs.recv().await.expect("One cleanup job");
    let usecase = CleanupReminderUseCase {
        reminder_id: job.reminder_id,
    };
    execute(usecase, &app.ctx).await.expect("To clean up");

    let sent = app.notifier.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[1].channel, CLEANUP_CHANNEL.id);
    assert_eq!(sent[1].notification_id, CLEANUP_NOTIFICATION_ID);

    let listed = execute(GetRemindersUseCase {}, &app.ctx)
        .await
        .expect("To list reminders");
    assert!(listed.is_empty());
}

#[tokio::test]
async fn blank_message_gets_the_default_message() {
    let app = setup(START_MILLIS);

    let usecase = CreateReminderUseCase {
        time: "18:00".into(),
        message: "".into(),
    };
    let created = execute(usecase, &app.ctx)
        .await
        .expect("To create reminder");
    assert_eq!(created.reminder.message, DEFAULT_REMINDER_MESSAGE);
    assert_eq!(created.reminder.time.to_string(), "18:00");
}

#[tokio::test]
async fn deleted_reminder_never_fires() {
    let app = setup(START_MILLIS);

    let usecase = CreateReminderUseCase {
        time: "07:30".into(),
        message: "Stretch".into(),
    };
    let created = execute(usecase, &app.ctx)
        .await
        .expect("To create reminder");

    let usecase = DeleteReminderUseCase {
        reminder_id: created.reminder.id,
    };
    execute(usecase, &app.ctx).await.expect("To delete reminder");

    // Even two days later the former alarm token has nothing to fire
    app.clock
        .set(START_MILLIS + Duration::days(2).num_milliseconds());
    assert!(app.alarms.take_due(app.clock.now()).await.is_empty());
    assert!(app.notifier.sent().is_empty());

    let listed = execute(GetRemindersUseCase {}, &app.ctx)
        .await
        .expect("To list reminders");
    assert!(listed.is_empty());
}

#[tokio::test]
async fn list_subscription_stays_sorted_and_propagates_mutations() {
    let app = setup(START_MILLIS);
    let mut subscription = app.ctx.repos.reminders.subscribe();

    let mut created_ids = Vec::new();
    for (time, message) in &[("18:00", "Evening"), ("07:30", "Morning"), ("12:00", "Noon")] {
        let usecase = CreateReminderUseCase {
            time: time.to_string(),
            message: message.to_string(),
        };
        let created = execute(usecase, &app.ctx)
            .await
            .expect("To create reminder");
        created_ids.push(created.reminder.id);
    }

    subscription.changed().await.expect("Snapshot emitted");
    {
        let snapshot = subscription.borrow();
        let times = snapshot
            .iter()
            .map(|reminder| reminder.time.to_string())
            .collect::<Vec<_>>();
        assert_eq!(times, vec!["07:30", "12:00", "18:00"]);
    }

    // Deleting propagates to the subscription without a manual refresh
    let usecase = DeleteReminderUseCase {
        reminder_id: created_ids[0],
    };
    execute(usecase, &app.ctx).await.expect("To delete reminder");

    subscription.changed().await.expect("Snapshot emitted");
    let snapshot = subscription.borrow();
    let messages = snapshot
        .iter()
        .map(|reminder| reminder.message.as_str())
        .collect::<Vec<_>>();
    assert_eq!(messages, vec!["Morning", "Noon"]);
}
