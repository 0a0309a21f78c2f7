//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Invalid operation or input
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_is_transparent() {
        let err: ApplicationError = DomainError::MissingField("name".to_string()).into();
        assert_eq!(err.to_string(), "Required field is empty: name");
    }

    #[test]
    fn external_service_message() {
        let err = ApplicationError::ExternalService("HTTP 502".to_string());
        assert_eq!(err.to_string(), "External service error: HTTP 502");
    }
}
