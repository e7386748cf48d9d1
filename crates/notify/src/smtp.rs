//! SMTP notifier backed by lettre.

use async_trait::async_trait;
use lettre::message::MultiPart;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::error::NotifyError;
use crate::notifier::{Notifier, OrderEmail};

/// Sends order notifications over authenticated SMTP.
///
/// A fresh transport is built per send to avoid connection pooling issues;
/// the blocking send runs on the tokio blocking pool.
#[derive(Clone)]
pub struct SmtpNotifier {
    smtp_server: String,
    smtp_port: u16,
    credentials: Credentials,
    from: String,
}

impl SmtpNotifier {
    /// Creates an SMTP notifier for the given relay and sender address.
    pub fn new(
        smtp_server: String,
        smtp_port: u16,
        username: String,
        password: String,
        from: String,
    ) -> Self {
        Self {
            smtp_server,
            smtp_port,
            credentials: Credentials::new(username, password),
            from,
        }
    }

    fn build_transport(&self) -> Result<SmtpTransport, NotifyError> {
        Ok(SmtpTransport::relay(&self.smtp_server)
            .map_err(|e| NotifyError::Transport(format!("SMTP relay error: {e}")))?
            .port(self.smtp_port)
            .credentials(self.credentials.clone())
            .build())
    }

    fn build_message(&self, email: &OrderEmail) -> Result<Message, NotifyError> {
        Message::builder()
            .from(
                self.from
                    .parse()
                    .map_err(|e| NotifyError::Address(format!("invalid from address: {e}")))?,
            )
            .to(email
                .to
                .parse()
                .map_err(|e| NotifyError::Address(format!("invalid to address: {e}")))?)
            .subject(&email.subject)
            .multipart(MultiPart::alternative_plain_html(
                email.text_body.clone(),
                email.html_body.clone(),
            ))
            .map_err(|e| NotifyError::Build(e.to_string()))
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send(&self, email: &OrderEmail) -> Result<(), NotifyError> {
        let message = self.build_message(email)?;
        let mailer = self.build_transport()?;

        tokio::task::spawn_blocking(move || {
            mailer
                .send(&message)
                .map(|_| ())
                .map_err(|e| NotifyError::Transport(e.to_string()))
        })
        .await
        .map_err(|e| NotifyError::Task(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notifier() -> SmtpNotifier {
        SmtpNotifier::new(
            "smtp.example.com".to_string(),
            587,
            "user".to_string(),
            "password".to_string(),
            "Mirror-It <no-reply@mirror-it.shop>".to_string(),
        )
    }

    fn email(to: &str) -> OrderEmail {
        OrderEmail {
            to: to.to_string(),
            subject: "New Mirror-It order MIRROR-1-abcdef01".to_string(),
            html_body: "<p>order</p>".to_string(),
            text_body: "order".to_string(),
        }
    }

    #[test]
    fn builds_multipart_message_for_valid_addresses() {
        let message = notifier().build_message(&email("orders@mirror-it.shop"));
        assert!(message.is_ok());
    }

    #[test]
    fn rejects_unparseable_recipient() {
        let err = notifier().build_message(&email("not an address")).unwrap_err();
        assert!(matches!(err, NotifyError::Address(_)));
    }
}
