use super::{INotifier, Notification};
use tracing::info;

/// Notification presenter that posts every notification to a configured
/// webhook. When no webhook is configured the notification is only logged,
/// which keeps the storage and listing paths fully functional.
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: Option<String>,
}

impl WebhookNotifier {
    pub fn new(url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }
}

#[async_trait::async_trait]
impl INotifier for WebhookNotifier {
    async fn notify(&self, notification: Notification) -> anyhow::Result<()> {
        match &self.url {
            Some(url) => {
                self.client
                    .post(url)
                    .json(&notification)
                    .send()
                    .await?
                    .error_for_status()?;
                Ok(())
            }
            None => {
                info!(
                    "Notification display is not configured. {} [{}]: {}",
                    notification.title, notification.notification_id, notification.body
                );
                Ok(())
            }
        }
    }
}
