//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It is
//! read-only after startup: parsed configuration, estimate routing, and the
//! optional mail transport.

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::services::estimate::EstimateRouting;
use crate::services::mailer::Mailer;

/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub routing: Arc<EstimateRouting>,
    /// `None` when `RESEND_API_KEY` is not configured.
    pub mailer: Option<Arc<dyn Mailer>>,
}

impl AppState {
    #[must_use]
    pub fn new(config: SiteConfig, mailer: Option<Arc<dyn Mailer>>) -> Self {
        let routing = EstimateRouting {
            to: config.estimate_to_email.clone(),
            from: config.estimate_from_email.clone(),
        };
        Self { config: Arc::new(config), routing: Arc::new(routing), mailer }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::services::mailer::{MailError, OutboundEmail};
    use std::sync::Mutex;

    /// Mailer that records every message and optionally fails delivery.
    pub struct RecordingMailer {
        sent: Mutex<Vec<OutboundEmail>>,
        fail: bool,
    }

    impl RecordingMailer {
        #[must_use]
        pub fn new() -> Self {
            Self { sent: Mutex::new(Vec::new()), fail: false }
        }

        #[must_use]
        pub fn failing() -> Self {
            Self { sent: Mutex::new(Vec::new()), fail: true }
        }

        pub fn sent(&self) -> Vec<OutboundEmail> {
            self.sent.lock().expect("mock mutex should lock").clone()
        }
    }

    #[async_trait::async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
            self.sent
                .lock()
                .expect("mock mutex should lock")
                .push(email.clone());
            if self.fail {
                return Err(MailError::Delivery("provider returned 422".into()));
            }
            Ok(())
        }
    }

    /// Create a test `AppState` with default config and no mail transport.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(SiteConfig::default(), None)
    }

    /// Create a test `AppState` wired to the given mailer.
    #[must_use]
    pub fn test_app_state_with_mailer(mailer: Arc<RecordingMailer>) -> AppState {
        let mailer: Arc<dyn Mailer> = mailer;
        AppState::new(SiteConfig::default(), Some(mailer))
    }
}
