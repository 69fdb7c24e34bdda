//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own validation and delivery logic so route handlers can
//! stay focused on status codes and JSON shapes.

pub mod coverage;
pub mod estimate;
pub mod mailer;
