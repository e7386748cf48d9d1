//! Notification error types.

use thiserror::Error;

/// Errors that can occur while building or delivering a notification email.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// A sender or recipient address failed to parse.
    #[error("Invalid email address: {0}")]
    Address(String),

    /// The message could not be assembled.
    #[error("Failed to build email: {0}")]
    Build(String),

    /// The SMTP transport rejected or failed the send.
    #[error("SMTP transport error: {0}")]
    Transport(String),

    /// The blocking send task was cancelled or panicked.
    #[error("Email task failed: {0}")]
    Task(String),
}
