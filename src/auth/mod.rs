//! Signup flow: validation, the auth backend relay, and local session
//! persistence.
//!
//! The auth backend is an external collaborator; this module only validates
//! the form, posts the shaped payload, and interprets the response envelope.
//! Credentials never persist here — only the returned token and user record.

mod session;
mod validate;

pub use session::SessionStore;
pub use validate::{validate, SignupError};

use reqwest::Client;
use thiserror::Error;

use crate::models::{AuthResponse, SignupRequest};

/// Transport-level signup failure. Backend rejections (`success: false`) are
/// not errors; they come back inside [`AuthResponse`].
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("auth backend returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Client for the external auth backend.
#[derive(Debug, Clone)]
pub struct AuthClient {
    base_url: String,
    client: Client,
}

impl AuthClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    /// Post a validated signup to the backend. Exactly one attempt, no
    /// timeout beyond the transport's own; a hung backend means a hung call.
    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, AuthError> {
        let url = format!("{}/api/auth/signup", self.base_url);
        let response = self.client.post(&url).json(request).send().await?;

        let status = response.status();
        // The backend reports domain failures as JSON envelopes, sometimes
        // with non-2xx statuses. Decode the envelope when there is one.
        match response.json::<AuthResponse>().await {
            Ok(envelope) => Ok(envelope),
            Err(_) if !status.is_success() => Err(AuthError::Status(status)),
            Err(e) => Err(AuthError::Http(e)),
        }
    }
}
