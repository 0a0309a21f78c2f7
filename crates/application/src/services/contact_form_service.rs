//! Contact form service
//!
//! One submit is one delivery attempt. There is no retry; after a failure
//! the visitor resubmits by hand.

use std::{fmt, sync::Arc};

use domain::{ContactSubmission, DEFAULT_RECIPIENT_LABEL, DomainError};
use tracing::{error, info, instrument};

use crate::ports::{ContactFormView, DeliveryReceipt, MessageDeliveryPort};

/// Submit label while a message is being sent
pub const PENDING_LABEL: &str = "Sender...";

/// Prefix of every error shown to the visitor
pub const ERROR_PREFIX: &str = "Der opstod en fejl: ";

/// Shown when the provider gave no error text
pub const FALLBACK_ERROR_TEXT: &str = "Ukendt fejl. Prøv venligst igen.";

/// Shown when a required field is blank
pub const MISSING_FIELDS_TEXT: &str = "Udfyld venligst alle felter.";

/// Provider identifiers and the fixed recipient label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFormSettings {
    /// Provider service identifier
    pub service_id: String,
    /// Provider template identifier
    pub template_id: String,
    /// Recipient label sent as `to_name`
    pub recipient_label: String,
}

impl ContactFormSettings {
    pub fn new(service_id: impl Into<String>, template_id: impl Into<String>) -> Self {
        Self {
            service_id: service_id.into(),
            template_id: template_id.into(),
            recipient_label: DEFAULT_RECIPIENT_LABEL.to_string(),
        }
    }

    #[must_use]
    pub fn with_recipient_label(mut self, label: impl Into<String>) -> Self {
        self.recipient_label = label.into();
        self
    }
}

/// Result of one submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The provider accepted the message
    Sent(DeliveryReceipt),
    /// Nothing was delivered; carries the text shown in the error indicator
    Failed(String),
}

/// Text shown in the error indicator
pub fn error_message(text: Option<&str>) -> String {
    format!("{ERROR_PREFIX}{}", text.unwrap_or(FALLBACK_ERROR_TEXT))
}

/// Handles contact form submissions
pub struct ContactFormService {
    delivery: Arc<dyn MessageDeliveryPort>,
    settings: ContactFormSettings,
}

impl fmt::Debug for ContactFormService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactFormService")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl ContactFormService {
    /// Create a new contact form service
    pub fn new(delivery: Arc<dyn MessageDeliveryPort>, settings: ContactFormSettings) -> Self {
        Self { delivery, settings }
    }

    #[must_use]
    pub const fn settings(&self) -> &ContactFormSettings {
        &self.settings
    }

    /// Handle one form submission
    ///
    /// Puts the submit control into its pending state, sends the message,
    /// updates the indicators and always restores the control afterwards.
    #[instrument(skip(self, view))]
    pub async fn submit<V: ContactFormView + ?Sized>(&self, view: &V) -> SubmitOutcome {
        let original_label = view.submit_label();
        view.set_submit_label(PENDING_LABEL);
        view.set_submit_enabled(false);

        let outcome = self.deliver(view).await;

        match &outcome {
            SubmitOutcome::Sent(_) => {
                view.set_success_visible(true);
                view.hide_error();
                view.clear_fields();
            },
            SubmitOutcome::Failed(message) => {
                view.show_error(message);
                view.set_success_visible(false);
            },
        }

        view.set_submit_label(&original_label);
        view.set_submit_enabled(true);
        outcome
    }

    async fn deliver<V: ContactFormView + ?Sized>(&self, view: &V) -> SubmitOutcome {
        let submission = match ContactSubmission::from_fields(
            |field| view.field_value(field),
            self.settings.recipient_label.clone(),
        ) {
            Ok(submission) => submission,
            Err(DomainError::MissingField(field)) => {
                info!(field = %field, "Contact form submitted with a blank field");
                return SubmitOutcome::Failed(error_message(Some(MISSING_FIELDS_TEXT)));
            },
            Err(e) => return SubmitOutcome::Failed(error_message(Some(&e.to_string()))),
        };

        let params = submission.template_params();
        info!(
            subject = %params.subject,
            to = %params.to_name,
            "Sending contact message"
        );

        match self
            .delivery
            .send(&self.settings.service_id, &self.settings.template_id, &params)
            .await
        {
            Ok(receipt) => {
                info!(status = receipt.status, text = %receipt.text, "Contact message sent");
                SubmitOutcome::Sent(receipt)
            },
            Err(failure) => {
                error!(status = ?failure.status, error = %failure, "Contact message failed");
                SubmitOutcome::Failed(error_message(failure.text()))
            },
        }
    }
}
