use life_reminder_infra::{ISys, InMemoryNotifier, InProcessAlarmScheduler, ReminderContext};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Clock that only moves when the test says so
pub struct TestClock {
    now: Arc<AtomicI64>,
}

impl TestClock {
    pub fn new(start_millis: i64) -> Self {
        Self {
            now: Arc::new(AtomicI64::new(start_millis)),
        }
    }

    pub fn set(&self, millis: i64) {
        self.now.store(millis, Ordering::SeqCst);
    }

    pub fn now(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }

    fn sys(&self) -> Arc<dyn ISys> {
        Arc::new(StaticTimeSys {
            now: self.now.clone(),
        })
    }
}

struct StaticTimeSys {
    now: Arc<AtomicI64>,
}

impl ISys for StaticTimeSys {
    fn get_timestamp_millis(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }

    fn get_timezone(&self) -> chrono_tz::Tz {
        chrono_tz::UTC
    }
}

pub struct TestApp {
    pub ctx: ReminderContext,
    pub alarms: Arc<InProcessAlarmScheduler>,
    pub notifier: Arc<InMemoryNotifier>,
    pub clock: TestClock,
}

/// Context wired against inspectable in-memory platform services
pub fn setup(start_millis: i64) -> TestApp {
    let mut ctx = ReminderContext::create_inmemory();

    let alarms = Arc::new(InProcessAlarmScheduler::new(true));
    let notifier = Arc::new(InMemoryNotifier::new());
    let clock = TestClock::new(start_millis);

    ctx.alarms = alarms.clone();
    ctx.notifier = notifier.clone();
    ctx.sys = clock.sys();

    TestApp {
        ctx,
        alarms,
        notifier,
        clock,
    }
}
