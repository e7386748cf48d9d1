//! Log-only notifier for development and tests.

use async_trait::async_trait;
use tracing::info;

use crate::error::NotifyError;
use crate::notifier::{Notifier, OrderEmail};

/// Logs order notifications instead of sending them. Selected at startup
/// when no SMTP relay is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl LogNotifier {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, email: &OrderEmail) -> Result<(), NotifyError> {
        info!(
            to = %email.to,
            subject = %email.subject,
            body = %email.text_body,
            "order notification (log transport)"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn log_notifier_always_succeeds() {
        let email = OrderEmail {
            to: "orders@mirror-it.shop".to_string(),
            subject: "New Mirror-It order MIRROR-1-abcdef01".to_string(),
            html_body: "<p>order</p>".to_string(),
            text_body: "order".to_string(),
        };
        assert!(LogNotifier::new().send(&email).await.is_ok());
    }
}
