//! EmailJS client for sending template messages

use std::fmt;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// EmailJS API errors
#[derive(Debug, Error)]
pub enum EmailJsError {
    /// The HTTP client could not be built
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The request never got an answer
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// EmailJS answered with a non-success status
    #[error("Rejected ({status}): {text}")]
    Rejected { status: u16, text: String },

    #[error("Missing configuration: {0}")]
    Configuration(String),
}

impl EmailJsError {
    /// Status code of a provider rejection
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Provider text of a rejection, if it had any
    #[must_use]
    pub fn provider_text(&self) -> Option<&str> {
        match self {
            Self::Rejected { text, .. } if !text.is_empty() => Some(text),
            _ => None,
        }
    }
}

/// EmailJS client configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct EmailJsConfig {
    /// API base URL (default: <https://api.emailjs.com>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Account public key, sent as `user_id`
    #[serde(default)]
    pub public_key: String,

    /// Optional private key, sent as `accessToken`
    #[serde(default)]
    pub private_key: Option<String>,

    /// Request timeout in seconds (ignored in the browser)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.emailjs.com".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            public_key: String::new(),
            private_key: None,
            timeout_secs: default_timeout(),
        }
    }
}

impl fmt::Debug for EmailJsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailJsConfig")
            .field("base_url", &self.base_url)
            .field("public_key", &"[REDACTED]")
            .field("private_key", &self.private_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Successful send acknowledgement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsResponse {
    pub status: u16,
    pub text: String,
}

/// Body of `POST /api/v1.0/email/send`
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a serde_json::Value,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
}

/// Client trait for template delivery
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait EmailClient: Send + Sync {
    /// Render `template_id` with `template_params` and send it via `service_id`
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        template_params: &serde_json::Value,
    ) -> Result<EmailJsResponse, EmailJsError>;
}

/// EmailJS REST client
#[derive(Debug, Clone)]
pub struct EmailJsClient {
    client: Client,
    config: EmailJsConfig,
}

impl EmailJsClient {
    /// Create a new client
    ///
    /// A missing public key is reported by [`EmailClient::send`], so a
    /// client can be built before the key is known.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: EmailJsConfig) -> Result<Self, EmailJsError> {
        if config.public_key.trim().is_empty() {
            warn!("EmailJS public key not configured, every send will fail");
        }

        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_secs(config.timeout_secs));
        let client = builder
            .build()
            .map_err(|e| EmailJsError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn send_url(&self) -> String {
        format!(
            "{}/api/v1.0/email/send",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl EmailClient for EmailJsClient {
    #[instrument(skip(self, template_params))]
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        template_params: &serde_json::Value,
    ) -> Result<EmailJsResponse, EmailJsError> {
        if self.config.public_key.trim().is_empty() {
            return Err(EmailJsError::Configuration("public_key".to_string()));
        }

        let request = SendRequest {
            service_id,
            template_id,
            user_id: &self.config.public_key,
            template_params,
            access_token: self.config.private_key.as_deref(),
        };

        debug!(url = %self.send_url(), "Sending EmailJS template");

        let response = self
            .client
            .post(self.send_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| EmailJsError::RequestFailed(e.to_string()))?;

        let status = response.status().as_u16();
        let success = response.status().is_success();
        let text = response
            .text()
            .await
            .map_err(|e| EmailJsError::RequestFailed(e.to_string()))?;

        if success {
            Ok(EmailJsResponse { status, text })
        } else {
            warn!(status, text = %text, "EmailJS rejected the message");
            Err(EmailJsError::Rejected { status, text })
        }
    }
}
