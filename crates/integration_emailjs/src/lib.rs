//! EmailJS integration
//!
//! Client for the EmailJS REST API (<https://www.emailjs.com/docs/rest-api/send/>),
//! which renders a stored template with the given parameters and delivers it
//! through a configured email service.

mod client;

pub use client::{EmailClient, EmailJsClient, EmailJsConfig, EmailJsError, EmailJsResponse};
