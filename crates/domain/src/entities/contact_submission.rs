//! Contact form submission
//!
//! Built fresh from the form fields on every submit and dropped once the
//! delivery attempt resolves.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Recipient label sent along with every message
pub const DEFAULT_RECIPIENT_LABEL: &str = "Naturnat";

/// The user-editable fields of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    /// All fields in form order
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// Field identifier, which is also the input's element id
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message a visitor wants delivered to the site owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    sender_name: String,
    sender_email: String,
    subject: String,
    message: String,
    recipient_label: String,
}

impl ContactSubmission {
    /// Create a submission from raw field values
    ///
    /// Values are kept exactly as typed; only blank fields are rejected.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingField` naming the first blank field.
    pub fn new(
        sender_name: impl Into<String>,
        sender_email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
        recipient_label: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let submission = Self {
            sender_name: sender_name.into(),
            sender_email: sender_email.into(),
            subject: subject.into(),
            message: message.into(),
            recipient_label: recipient_label.into(),
        };

        for field in ContactField::ALL {
            if submission.field(field).trim().is_empty() {
                return Err(DomainError::MissingField(field.to_string()));
            }
        }

        Ok(submission)
    }

    /// Build a submission by reading each field through `read`
    pub fn from_fields(
        mut read: impl FnMut(ContactField) -> String,
        recipient_label: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Self::new(
            read(ContactField::Name),
            read(ContactField::Email),
            read(ContactField::Subject),
            read(ContactField::Message),
            recipient_label,
        )
    }

    /// Value of a user-editable field
    #[must_use]
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.sender_name,
            ContactField::Email => &self.sender_email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    #[must_use]
    pub fn recipient_label(&self) -> &str {
        &self.recipient_label
    }

    /// Parameters in the shape the delivery template expects
    #[must_use]
    pub fn template_params(&self) -> TemplateParams {
        TemplateParams {
            from_name: self.sender_name.clone(),
            from_email: self.sender_email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
            to_name: self.recipient_label.clone(),
        }
    }
}

/// Template parameters of the delivery service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub to_name: String,
}
