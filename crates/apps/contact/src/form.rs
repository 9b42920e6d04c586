//! Contact draft validation and submission.

use platform_host::{FormField, HttpService};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Form relay endpoint receiving contact submissions.
pub const CONTACT_ENDPOINT: &str = "https://formsubmit.co/ajax/abeihhamani24@gmail.com";
/// Subject line attached to every submission.
pub const CONTACT_SUBJECT: &str = "New Contact Form Submission - Portfolio";
/// Message shown when the relay rejects or cannot be reached.
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to send message. Please try again.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Editable contact form contents.
pub struct ContactDraft {
    /// Sender name (required).
    pub name: String,
    /// Sender email (required).
    pub email: String,
    /// Sender company (optional).
    pub company: String,
    /// Message body (required).
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
/// Reason a draft cannot be submitted.
pub enum ValidationError {
    /// Name is blank.
    #[error("Please enter your name.")]
    EmptyName,
    /// Email is blank.
    #[error("Please enter your email address.")]
    EmptyEmail,
    /// Email does not look like `local@domain.tld`.
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    /// Message is blank.
    #[error("Please enter a message.")]
    EmptyMessage,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Failure while submitting a draft.
pub enum ContactSubmitError {
    /// The draft failed local validation; nothing was sent.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    /// The relay rejected the request or could not be reached.
    #[error("{SUBMIT_FAILED_MESSAGE}")]
    Transport(String),
}

impl ContactDraft {
    /// Checks required fields in display order, then the email shape.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::EmptyEmail);
        }
        if self.message.trim().is_empty() {
            return Err(ValidationError::EmptyMessage);
        }
        if !is_plausible_email(self.email.trim()) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }

    /// Builds the relay form fields; `company` is omitted when blank.
    pub fn form_fields(&self) -> Vec<FormField> {
        let email = self.email.trim();
        let mut fields = vec![
            FormField::new("name", self.name.trim()),
            FormField::new("email", email),
            FormField::new("message", self.message.trim()),
        ];
        if !self.company.trim().is_empty() {
            fields.push(FormField::new("company", self.company.trim()));
        }
        fields.extend([
            FormField::new("_subject", CONTACT_SUBJECT),
            FormField::new("_replyto", email),
            FormField::new("_captcha", "false"),
            FormField::new("_template", "table"),
        ]);
        fields
    }
}

fn is_plausible_email(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Validates `draft` and posts it to [`CONTACT_ENDPOINT`].
pub async fn submit(http: &dyn HttpService, draft: &ContactDraft) -> Result<(), ContactSubmitError> {
    draft.validate()?;
    let fields = draft.form_fields();
    http.post_form(CONTACT_ENDPOINT, &fields)
        .await
        .map(|_| ())
        .map_err(ContactSubmitError::Transport)
}
