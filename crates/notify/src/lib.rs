//! Order notification delivery for the Mirror-It backend.
//!
//! Provides the [`Notifier`] seam the boundary layer sends order
//! confirmations through, with an SMTP implementation for production and a
//! log-only implementation for development. Delivery is best-effort by
//! contract: callers log failures and never fail the order over them.

pub mod error;
pub mod log;
pub mod notifier;
pub mod smtp;
pub mod template;

pub use error::NotifyError;
pub use log::LogNotifier;
pub use notifier::{Notifier, OrderEmail};
pub use smtp::SmtpNotifier;
pub use template::render_order_email;
