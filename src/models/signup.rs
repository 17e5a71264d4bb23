use serde::{Deserialize, Serialize};

/// Raw signup form fields, exactly as the user typed them.
///
/// Trimming and email lowercasing happen at submission time, after
/// validation; the form itself is never mutated so a failed submission
/// leaves every field populated for retry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Payload posted to the auth backend after validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignupRequest {
    /// Shape a validated form for the wire: trimmed name, trimmed and
    /// lower-cased email, password untouched.
    pub fn from_form(form: &SignupForm) -> Self {
        Self {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_lowercase(),
            password: form.password.clone(),
        }
    }
}

/// Response envelope from the auth backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<AuthSession>,
}

/// Token plus user record handed back on successful signup.
///
/// Persisted locally for session continuity (the `SessionStore` file is the
/// analog of the web client's local storage).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

/// User record as the auth backend reports it. Fields beyond the known three
/// are carried through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
