//! # lead-relay
//!
//! Delivers lead-form messages through a transactional-email service.
//!
//! ## Flow
//!
//! ```text
//! ┌─────────────┐  POST /api/contact  ┌────────────────┐  REST  ┌──────────────┐
//! │ catalog-web │────────────────────▶│ catalog-server │───────▶│ email service│
//! │   (form)    │                     │ EmailJsClient  │        │  (EmailJS)   │
//! └─────────────┘                     └────────────────┘        └──────────────┘
//! ```
//!
//! Service, template and key identifiers stay on the server; the browser
//! never sees them.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use catalog_core::{ContactForm, LeadForm, MessageRelay};
//! use lead_relay::EmailJsClient;
//!
//! let relay = EmailJsClient::from_env()?;
//! relay.send(&form.to_message("sales@example.com")).await?;
//! ```

mod emailjs;
mod error;
mod mock;

pub use emailjs::{EmailJsClient, EmailJsConfig, EmailJsRequest, TemplateParams};
pub use error::{RelayError, Result};
pub use mock::MockRelay;
