//! Message delivery port
//!
//! Sends contact form messages through an external template-based delivery
//! service. Implemented by adapters in the infrastructure layer.

use async_trait::async_trait;
use domain::TemplateParams;
use thiserror::Error;

/// Provider acknowledgement of a delivered message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    /// HTTP-like status code reported by the provider
    pub status: u16,
    /// Provider response text (usually `OK`)
    pub text: String,
}

/// Rejection reported by the delivery provider or the transport
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("message delivery failed: {}", .text.as_deref().unwrap_or("no details"))]
pub struct DeliveryFailure {
    /// Status code, when the provider answered at all
    pub status: Option<u16>,
    /// Provider error text, if any
    pub text: Option<String>,
}

impl DeliveryFailure {
    /// Failure with provider text
    pub fn with_text(status: Option<u16>, text: impl Into<String>) -> Self {
        Self {
            status,
            text: Some(text.into()),
        }
    }

    /// Failure without any usable text
    #[must_use]
    pub const fn without_text(status: Option<u16>) -> Self {
        Self { status, text: None }
    }

    /// Provider text, treating an empty string as absent
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }
}

/// Port for delivering template messages
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait MessageDeliveryPort: Send + Sync {
    /// Send one message
    ///
    /// # Arguments
    /// * `service_id` - Provider service identifier
    /// * `template_id` - Provider template identifier
    /// * `params` - Values substituted into the template
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
    ) -> Result<DeliveryReceipt, DeliveryFailure>;
}
