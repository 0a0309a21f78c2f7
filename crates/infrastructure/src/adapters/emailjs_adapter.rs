//! EmailJS adapter - Implements MessageDeliveryPort using integration_emailjs

use std::sync::Arc;

use application::ports::{DeliveryFailure, DeliveryReceipt, MessageDeliveryPort};
use async_trait::async_trait;
use domain::TemplateParams;
use integration_emailjs::{EmailClient, EmailJsClient, EmailJsConfig, EmailJsError};
use tracing::{debug, instrument, warn};

/// Adapter delivering contact messages through EmailJS
pub struct EmailJsAdapter {
    client: Arc<dyn EmailClient>,
}

impl std::fmt::Debug for EmailJsAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailJsAdapter").finish_non_exhaustive()
    }
}

impl EmailJsAdapter {
    /// Create an adapter backed by the EmailJS REST client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: EmailJsConfig) -> Result<Self, EmailJsError> {
        let client = EmailJsClient::new(config)?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Create an adapter over any EmailJS client
    #[must_use]
    pub fn with_client(client: Arc<dyn EmailClient>) -> Self {
        Self { client }
    }

    /// Map a client error to the failure shown to the visitor
    fn map_error(err: &EmailJsError) -> DeliveryFailure {
        match err.provider_text() {
            Some(text) => DeliveryFailure::with_text(err.status(), text),
            None => DeliveryFailure::without_text(err.status()),
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl MessageDeliveryPort for EmailJsAdapter {
    #[instrument(skip(self, params))]
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
    ) -> Result<DeliveryReceipt, DeliveryFailure> {
        let template_params = serde_json::to_value(params).map_err(|e| {
            warn!(error = %e, "Failed to encode template parameters");
            DeliveryFailure::without_text(None)
        })?;

        match self.client.send(service_id, template_id, &template_params).await {
            Ok(response) => {
                debug!(status = response.status, "EmailJS accepted the message");
                Ok(DeliveryReceipt {
                    status: response.status,
                    text: response.text,
                })
            },
            Err(e) => {
                debug!(error = %e, "EmailJS delivery failed");
                Err(Self::map_error(&e))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use integration_emailjs::EmailJsResponse;
    use mockall::mock;

    use super::*;

    mock! {
        pub Client {}

        #[async_trait::async_trait]
        impl EmailClient for Client {
            async fn send(
                &self,
                service_id: &str,
                template_id: &str,
                template_params: &serde_json::Value,
            ) -> Result<EmailJsResponse, EmailJsError>;
        }
    }

    fn params() -> TemplateParams {
        TemplateParams {
            from_name: "Ida".to_string(),
            from_email: "ida@example.dk".to_string(),
            subject: "Overnatning".to_string(),
            message: "Er der plads i juli?".to_string(),
            to_name: "Naturnat".to_string(),
        }
    }

    #[tokio::test]
    async fn send_passes_template_params() {
        let mut client = MockClient::new();
        client
            .expect_send()
            .withf(|service, template, value| {
                service == "service_5fvsv6q"
                    && template == "template_fyb7xpa"
                    && value["from_name"] == "Ida"
                    && value["to_name"] == "Naturnat"
            })
            .times(1)
            .returning(|_, _, _| {
                Ok(EmailJsResponse {
                    status: 200,
                    text: "OK".to_string(),
                })
            });

        let adapter = EmailJsAdapter::with_client(Arc::new(client));
        let receipt = adapter
            .send("service_5fvsv6q", "template_fyb7xpa", &params())
            .await
            .unwrap();

        assert_eq!(receipt.status, 200);
        assert_eq!(receipt.text, "OK");
    }

    #[tokio::test]
    async fn rejection_keeps_provider_text() {
        let mut client = MockClient::new();
        client.expect_send().returning(|_, _, _| {
            Err(EmailJsError::Rejected {
                status: 400,
                text: "The template ID is invalid".to_string(),
            })
        });

        let adapter = EmailJsAdapter::with_client(Arc::new(client));
        let failure = adapter
            .send("service_5fvsv6q", "template_bad", &params())
            .await
            .unwrap_err();

        assert_eq!(failure.status, Some(400));
        assert_eq!(failure.text(), Some("The template ID is invalid"));
    }

    #[test]
    fn transport_error_has_no_text() {
        let failure =
            EmailJsAdapter::map_error(&EmailJsError::RequestFailed("connection refused".into()));
        assert_eq!(failure.status, None);
        assert_eq!(failure.text(), None);
    }

    #[test]
    fn empty_rejection_has_no_text() {
        let failure = EmailJsAdapter::map_error(&EmailJsError::Rejected {
            status: 500,
            text: String::new(),
        });
        assert_eq!(failure.status, Some(500));
        assert_eq!(failure.text(), None);
    }

    #[tokio::test]
    async fn missing_public_key_is_a_delivery_failure() {
        let adapter = EmailJsAdapter::new(EmailJsConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            ..Default::default()
        })
        .unwrap();

        let failure = adapter
            .send("service_5fvsv6q", "template_fyb7xpa", &params())
            .await
            .unwrap_err();

        assert_eq!(failure.status, None);
        assert_eq!(failure.text(), None);
    }
}
