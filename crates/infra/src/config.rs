use chrono_tz::Tz;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Connection string for the reminder record store
    pub database_url: String,
    /// Webhook that notifications are posted to. When not configured,
    /// notifications are only logged and the rest of the lifecycle keeps
    /// working (the storage and listing paths are unaffected).
    pub notify_webhook_url: Option<String>,
    /// Whether the platform permits exact wall-clock alarms
    pub exact_alarms_allowed: bool,
    /// Timezone in which reminder times of day are interpreted
    pub timezone: Tz,
}

impl Config {
    pub fn new() -> Self {
        const DEFAULT_DATABASE_URL: &str = "sqlite://reminders.db?mode=rwc";

        let database_url = match std::env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                info!(
                    "Did not find DATABASE_URL environment variable. Falling back to: {}",
                    DEFAULT_DATABASE_URL
                );
                DEFAULT_DATABASE_URL.into()
            }
        };

        let notify_webhook_url = match std::env::var("NOTIFY_WEBHOOK_URL") {
            Ok(url) => Some(url),
            Err(_) => {
                info!("Did not find NOTIFY_WEBHOOK_URL environment variable. Notifications will only be logged.");
                None
            }
        };

        let timezone = match std::env::var("TIMEZONE") {
            Ok(value) => match value.parse::<Tz>() {
                Ok(timezone) => timezone,
                Err(_) => {
                    warn!(
                        "The given TIMEZONE: {} is not valid, falling back to: UTC.",
                        value
                    );
                    chrono_tz::UTC
                }
            },
            Err(_) => {
                info!("Did not find TIMEZONE environment variable. Falling back to: UTC.");
                chrono_tz::UTC
            }
        };

        let exact_alarms_allowed = match std::env::var("EXACT_ALARMS_ALLOWED") {
            Ok(value) => match value.parse::<bool>() {
                Ok(allowed) => allowed,
                Err(_) => {
                    warn!(
                        "The given EXACT_ALARMS_ALLOWED: {} is not valid, falling back to: true.",
                        value
                    );
                    true
                }
            },
            Err(_) => true,
        };

        Self {
            database_url,
            notify_webhook_url,
            exact_alarms_allowed,
            timezone,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
