//! Form submissions: newsletter signups and contact messages.
//!
//! The storefront never talks to a backend for these; callers go through the
//! [`SubmissionService`] capability so a real transport can replace
//! [`SimulatedSubmissionService`] without touching the forms.

use std::fmt;
use std::str::FromStr;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{CommerceError, Result};

/// A newsletter signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterSignup {
    pub email: String,
}

impl NewsletterSignup {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_email(&self.email)
    }
}

/// Topic picked on the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContactSubject {
    #[default]
    General,
    Order,
    Wholesale,
    Other,
}

impl ContactSubject {
    pub const ALL: [ContactSubject; 4] = [
        ContactSubject::General,
        ContactSubject::Order,
        ContactSubject::Wholesale,
        ContactSubject::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactSubject::General => "general",
            ContactSubject::Order => "order",
            ContactSubject::Wholesale => "wholesale",
            ContactSubject::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ContactSubject::General => "General Inquiry",
            ContactSubject::Order => "Order Support",
            ContactSubject::Wholesale => "Wholesale Inquiry",
            ContactSubject::Other => "Other",
        }
    }
}

impl fmt::Display for ContactSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ContactSubject {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_lowercase();
        ContactSubject::ALL
            .into_iter()
            .find(|subject| subject.as_str() == lower)
            .ok_or_else(|| CommerceError::InvalidCriteria(format!("unknown contact subject {:?}", s)))
    }
}

/// A message from the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: ContactSubject,
    pub message: String,
}

impl ContactMessage {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: ContactSubject,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject,
            message: message.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CommerceError::MissingField("name"));
        }
        validate_email(&self.email)?;
        if self.message.trim().is_empty() {
            return Err(CommerceError::MissingField("message"));
        }
        Ok(())
    }
}

/// Which form a receipt acknowledges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionKind {
    Newsletter,
    Contact,
}

/// Acknowledgement shown to the visitor after a submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub kind: SubmissionKind,
    pub title: String,
    pub message: String,
    pub received_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    fn newsletter() -> Self {
        Self {
            kind: SubmissionKind::Newsletter,
            title: "Subscribed!".to_string(),
            message: "You've successfully subscribed to our newsletter.".to_string(),
            received_at: Utc::now(),
        }
    }

    fn contact() -> Self {
        Self {
            kind: SubmissionKind::Contact,
            title: "Message Sent".to_string(),
            message: "We've received your message and will get back to you soon.".to_string(),
            received_at: Utc::now(),
        }
    }
}

/// Capability for delivering form submissions.
#[async_trait]
pub trait SubmissionService: Send + Sync {
    /// Subscribe an address to the newsletter.
    async fn subscribe(&self, signup: NewsletterSignup) -> Result<SubmissionReceipt>;

    /// Deliver a contact-form message.
    async fn send_message(&self, message: ContactMessage) -> Result<SubmissionReceipt>;
}

/// An accepted submission, as recorded by [`SimulatedSubmissionService`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Submission {
    Newsletter(NewsletterSignup),
    Contact(ContactMessage),
}

/// Validates and acknowledges submissions without any I/O.
///
/// Accepted submissions are kept in memory so callers can inspect them.
#[derive(Debug, Default)]
pub struct SimulatedSubmissionService {
    log: Mutex<Vec<Submission>>,
}

impl SimulatedSubmissionService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything accepted so far, oldest first.
    pub fn submissions(&self) -> Vec<Submission> {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, submission: Submission) {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(submission);
    }
}

#[async_trait]
impl SubmissionService for SimulatedSubmissionService {
    async fn subscribe(&self, signup: NewsletterSignup) -> Result<SubmissionReceipt> {
        if let Err(e) = signup.validate() {
            warn!(error = %e, "newsletter signup rejected");
            return Err(e);
        }
        info!(email = %signup.email, "newsletter signup accepted");
        self.record(Submission::Newsletter(signup));
        Ok(SubmissionReceipt::newsletter())
    }

    async fn send_message(&self, message: ContactMessage) -> Result<SubmissionReceipt> {
        if let Err(e) = message.validate() {
            warn!(error = %e, "contact message rejected");
            return Err(e);
        }
        info!(
            email = %message.email,
            subject = message.subject.as_str(),
            length = message.message.len(),
            "contact message accepted"
        );
        self.record(Submission::Contact(message));
        Ok(SubmissionReceipt::contact())
    }
}

/// Minimal shape check: `local@domain.tld`, no whitespace, one `@`.
pub fn validate_email(email: &str) -> Result<()> {
    let invalid = || CommerceError::InvalidEmail(email.to_string());

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return Err(invalid());
    }
    Ok(())
}
