//! Outbound email transport.
//!
//! DESIGN
//! ======
//! Handlers depend on the `Mailer` trait, not on Resend directly. Production
//! wires in [`ResendMailer`]; tests substitute a recorder.

use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// The provider rejected the message or could not be reached.
    #[error("email delivery failed: {0}")]
    Delivery(String),
}

// =============================================================================
// MESSAGE
// =============================================================================

/// Provider-neutral plain-text message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub text: String,
    pub reply_to: Option<String>,
}

#[async_trait::async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver one message. A single attempt; callers do not retry.
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError>;
}

// =============================================================================
// RESEND
// =============================================================================

pub struct ResendMailer {
    client: Resend,
}

impl ResendMailer {
    #[must_use]
    pub fn new(api_key: &str) -> Self {
        Self { client: Resend::new(api_key) }
    }
}

#[async_trait::async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        let mut options = CreateEmailBaseOptions::new(&email.from, &email.to, &email.subject).with_text(&email.text);
        if let Some(reply_to) = &email.reply_to {
            options = options.with_reply(reply_to);
        }

        self.client
            .emails
            .send(options)
            .await
            .map_err(|e| MailError::Delivery(e.to_string()))?;
        Ok(())
    }
}
