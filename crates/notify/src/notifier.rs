//! The notification seam between the boundary layer and mail delivery.

use async_trait::async_trait;

use crate::error::NotifyError;

/// A rendered order notification ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderEmail {
    pub to: String,
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}

/// Delivery strategy for order notifications.
///
/// Chosen once at startup from configuration and injected as
/// `Arc<dyn Notifier>`; handlers never consult ambient global state to pick
/// a transport.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Delivers the email. Errors describe the delivery failure; the caller
    /// decides whether to swallow them (the order flow always does).
    async fn send(&self, email: &OrderEmail) -> Result<(), NotifyError>;
}
