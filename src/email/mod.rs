//! Outbound email seam.
//!
//! The business logic composes messages through [`templates`] and hands them
//! to a [`Mailer`]. The default [`LogMailer`] writes them to the structured
//! log instead of the wire, which is what development and tests want; a real
//! SMTP-backed mailer plugs in behind the same trait without touching the
//! call sites.

use crate::errors::Result;

pub mod templates;

/// A composed message, ready to hand to a mailer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Delivery seam for outbound email.
pub trait Mailer: Send + Sync {
    /// Hands a message off for delivery.
    ///
    /// # Errors
    /// Returns an error when the message cannot be accepted for delivery.
    fn send(&self, message: &EmailMessage) -> Result<()>;
}

/// Mailer that logs messages instead of sending them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogMailer;

impl Mailer for LogMailer {
    fn send(&self, message: &EmailMessage) -> Result<()> {
        tracing::info!(
            to = %message.to,
            subject = %message.subject,
            body_len = message.body.len(),
            "email delivered to log"
        );
        Ok(())
    }
}
