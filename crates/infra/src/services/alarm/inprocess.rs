use super::{AlarmPayload, ArmedAlarm, IAlarmScheduler};
use life_reminder_domain::ID;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tracing::warn;

/// Alarm scheduler keeping its armed alarms in process memory, keyed by
/// token. The alarm dispatcher drains due alarms through `take_due`.
pub struct InProcessAlarmScheduler {
    alarms: Mutex<HashMap<i64, ArmedAlarm>>,
    exact_allowed: AtomicBool,
}

impl InProcessAlarmScheduler {
    pub fn new(exact_allowed: bool) -> Self {
        Self {
            alarms: Mutex::new(HashMap::new()),
            exact_allowed: AtomicBool::new(exact_allowed),
        }
    }

    /// Flips the exact alarm capability, used to test the capability gate
    pub fn set_exact_allowed(&self, allowed: bool) {
        self.exact_allowed.store(allowed, Ordering::SeqCst);
    }

    /// Every currently armed alarm, ordered by fire instant
    pub fn armed(&self) -> Vec<ArmedAlarm> {
        let alarms = self.alarms.lock().unwrap();
        let mut armed = alarms.values().cloned().collect::<Vec<_>>();
        armed.sort_by_key(|alarm| alarm.fire_at);
        armed
    }
}

#[async_trait::async_trait]
impl IAlarmScheduler for InProcessAlarmScheduler {
    async fn arm(&self, token: &ID, fire_at: i64, payload: AlarmPayload) -> anyhow::Result<()> {
        let mut alarms = self.alarms.lock().unwrap();
        // Update current semantics: an existing alarm under this token is
        // replaced, never duplicated
        alarms.insert(
            token.inner(),
            ArmedAlarm {
                token: *token,
                fire_at,
                payload,
            },
        );
        Ok(())
    }

    async fn cancel(&self, token: &ID) {
        let mut alarms = self.alarms.lock().unwrap();
        alarms.remove(&token.inner());
    }

    async fn take_due(&self, horizon: i64) -> Vec<ArmedAlarm> {
        let mut alarms = self.alarms.lock().unwrap();
        let due_tokens = alarms
            .values()
            .filter(|alarm| alarm.fire_at <= horizon)
            .map(|alarm| alarm.token.inner())
            .collect::<Vec<_>>();
        let mut due = due_tokens
            .into_iter()
            .filter_map(|token| alarms.remove(&token))
            .collect::<Vec<_>>();
        due.sort_by_key(|alarm| alarm.fire_at);
        due
    }

    fn can_schedule_exact(&self) -> bool {
        self.exact_allowed.load(Ordering::SeqCst)
    }

    fn request_exact_capability(&self) {
        warn!("Exact alarms are not permitted. Redirecting the user to the capability grant screen.");
    }
}
