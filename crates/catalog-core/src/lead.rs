//! Lead Forms
//!
//! The contact and agent-submission forms, their validation, and the
//! submission flow shared by the browser and the server.
//!
//! ## Flow
//!
//! ```text
//!   Idle ──begin_submit──▶ Sending ──finish_submit(Ok)──▶ Idle (fields cleared, Sent)
//!    ▲        │                   └─finish_submit(Err)──▶ Idle (fields kept, Failed)
//!    └────────┘ invalid → Invalid notice, fields kept
//! ```
//!
//! While `Sending`, further submits are refused so the UI can disable the
//! submit control for the duration of the request.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entry::Category;
use crate::error::Result;

/// Which form a message came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    Contact,
    AgentSubmission,
}

/// Missing or malformed form input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in the {0} field.")]
    Missing(&'static str),

    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Message handed to the email relay
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    pub kind: FormKind,
    pub from_name: String,
    pub reply_to: String,
    #[serde(default)]
    pub phone: String,
    pub message: String,
    pub to_email: String,
    pub subject: String,
    pub submitted_at: DateTime<Utc>,
}

/// Delivers outbound messages (Strategy pattern)
///
/// Implemented by the transactional-email client and by test doubles.
#[async_trait]
pub trait MessageRelay: Send + Sync {
    async fn send(&self, message: &OutboundMessage) -> Result<()>;

    /// Relay name, for logs
    fn name(&self) -> &str;
}

/// Field values of a lead form
pub trait LeadForm: Clone + Default {
    const KIND: FormKind;

    fn validate(&self) -> std::result::Result<(), ValidationError>;

    /// Build the outbound message addressed to `to_email`
    fn to_message(&self, to_email: &str) -> OutboundMessage;
}

fn require(value: &str, field: &'static str) -> std::result::Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Missing(field))
    } else {
        Ok(())
    }
}

/// Loose syntactic check: one `@`, non-empty local part, dotted domain
/// with no empty labels
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

fn require_email(email: &str) -> std::result::Result<(), ValidationError> {
    require(email, "email")?;
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// General enquiry form
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub message: String,
}

impl LeadForm for ContactForm {
    const KIND: FormKind = FormKind::Contact;

    fn validate(&self) -> std::result::Result<(), ValidationError> {
        require(&self.name, "name")?;
        require_email(&self.email)?;
        require(&self.message, "message")
    }

    fn to_message(&self, to_email: &str) -> OutboundMessage {
        OutboundMessage {
            kind: Self::KIND,
            from_name: self.name.trim().to_string(),
            reply_to: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            message: self.message.trim().to_string(),
            to_email: to_email.to_string(),
            subject: format!("New enquiry from {}", self.name.trim()),
            submitted_at: Utc::now(),
        }
    }
}

/// Form for vendors proposing an agent for the catalog
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSubmissionForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub agent_name: String,
    #[serde(default)]
    pub category: Option<Category>,
    pub description: String,
    #[serde(default)]
    pub website: String,
}

impl LeadForm for AgentSubmissionForm {
    const KIND: FormKind = FormKind::AgentSubmission;

    fn validate(&self) -> std::result::Result<(), ValidationError> {
        require(&self.name, "name")?;
        require_email(&self.email)?;
        require(&self.agent_name, "agent name")?;
        require(&self.description, "description")
    }

    fn to_message(&self, to_email: &str) -> OutboundMessage {
        let category = self.category.map_or("Unspecified", Category::label);
        let mut message = format!(
            "Agent: {}\nCategory: {}\n",
            self.agent_name.trim(),
            category
        );
        if !self.website.trim().is_empty() {
            message.push_str(&format!("Website: {}\n", self.website.trim()));
        }
        message.push('\n');
        message.push_str(self.description.trim());

        OutboundMessage {
            kind: Self::KIND,
            from_name: self.name.trim().to_string(),
            reply_to: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            message,
            to_email: to_email.to_string(),
            subject: format!("Agent submission: {}", self.agent_name.trim()),
            submitted_at: Utc::now(),
        }
    }
}

/// User-visible notification raised by a submission
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// Message delivered; the form was reset
    Sent,
    /// Send failed; fields kept so the user can retry
    Failed(String),
    /// Input rejected before sending
    Invalid(ValidationError),
}

impl Notice {
    pub fn text(&self) -> String {
        match self {
            Self::Sent => "Thanks! Your message has been sent.".into(),
            Self::Failed(_) => "Something went wrong sending your message. Please try again.".into(),
            Self::Invalid(err) => err.to_string(),
        }
    }

    pub const fn is_error(&self) -> bool {
        !matches!(self, Self::Sent)
    }
}

/// Why a submit did not start
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    #[error("A submission is already in progress")]
    InFlight,

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Outcome of a completed submit
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Failed,
    Blocked,
}

/// Drives one form through validation and sending
#[derive(Clone, Debug, Default)]
pub struct FormController<F: LeadForm> {
    fields: F,
    sending: bool,
    notices: Vec<Notice>,
}

impl<F: LeadForm> FormController<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fields(fields: F) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    pub const fn fields(&self) -> &F {
        &self.fields
    }

    /// Edit field values. Ignored while a send is in flight.
    pub fn edit(&mut self, f: impl FnOnce(&mut F)) {
        if !self.sending {
            f(&mut self.fields);
        }
    }

    /// Whether the submit control should be disabled
    pub const fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Validate and enter the sending state, returning the snapshot to send.
    /// Notices from earlier attempts are dropped.
    pub fn begin_submit(&mut self) -> std::result::Result<F, SubmitBlocked> {
        if self.sending {
            return Err(SubmitBlocked::InFlight);
        }
        self.notices.clear();
        if let Err(err) = self.fields.validate() {
            self.notices.push(Notice::Invalid(err.clone()));
            return Err(err.into());
        }
        self.sending = true;
        Ok(self.fields.clone())
    }

    /// Leave the sending state, resetting the form on success
    pub fn finish_submit<E: std::fmt::Display>(&mut self, result: std::result::Result<(), E>) {
        self.sending = false;
        match result {
            Ok(()) => {
                self.fields = F::default();
                self.notices.push(Notice::Sent);
            }
            Err(err) => {
                tracing::warn!(form = ?F::KIND, error = %err, "lead form send failed");
                self.notices.push(Notice::Failed(err.to_string()));
            }
        }
    }

    /// Run the full flow against `relay`
    pub async fn submit(&mut self, relay: &dyn MessageRelay, to_email: &str) -> SubmitOutcome {
        let Ok(snapshot) = self.begin_submit() else {
            return SubmitOutcome::Blocked;
        };
        let message = snapshot.to_message(to_email);
        let result = relay.send(&message).await;
        let outcome = if result.is_ok() {
            SubmitOutcome::Sent
        } else {
            SubmitOutcome::Failed
        };
        self.finish_submit(result);
        outcome
    }
}
