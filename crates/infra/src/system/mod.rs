use chrono::Utc;
use chrono_tz::Tz;

// Mocking out time so that it is possible to run tests that depend on time.
pub trait ISys: Send + Sync {
    /// The current timestamp in millis
    fn get_timestamp_millis(&self) -> i64;
    /// The calendar in which times of day are interpreted
    fn get_timezone(&self) -> Tz;
}

/// System clock reading the real time in the configured timezone, used
/// when not testing
pub struct RealSys {
    timezone: Tz,
}

impl RealSys {
    pub fn new(timezone: Tz) -> Self {
        Self { timezone }
    }
}

impl ISys for RealSys {
    fn get_timestamp_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn get_timezone(&self) -> Tz {
        self.timezone
    }
}
