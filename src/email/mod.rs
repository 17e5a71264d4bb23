//! Email provider relays.
//!
//! This service is the relay route: it holds the Mailchimp and Brevo
//! credentials so the browser never sees them, shapes the payloads the
//! providers expect, and flattens every outcome — including transport
//! failures — into a `{success, message}` envelope. Nothing here propagates
//! an error to the caller.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Newsletter signup fields accepted from the site.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterSubscriber {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Contact-creation fields for Brevo.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrevoContact {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_ids: Option<Vec<i64>>,
}

/// What the site reports back to the user for any relay call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayOutcome {
    pub success: bool,
    pub message: String,
}

impl RelayOutcome {
    fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }

    fn failed(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub mailchimp_api_key: String,
    pub mailchimp_audience_id: String,
    /// Mailchimp routes requests by a datacenter prefix; overridable for
    /// tests, otherwise derived from the API key suffix.
    pub mailchimp_base_url: String,
    pub brevo_api_key: String,
    pub brevo_base_url: String,
}

impl EmailConfig {
    /// Datacenter prefix is the segment after the final `-` of the key,
    /// e.g. `...-us12` routes to `us12.api.mailchimp.com`.
    pub fn mailchimp_url_for_key(api_key: &str) -> String {
        let prefix = api_key.rsplit('-').next().unwrap_or("us1");
        format!("https://{prefix}.api.mailchimp.com/3.0")
    }
}

#[derive(Debug, Clone)]
pub struct EmailClient {
    config: EmailConfig,
    client: Client,
}

impl EmailClient {
    pub fn new(config: EmailConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Subscribe an address to the Mailchimp audience. An already-subscribed
    /// address is a success, matching what the user meant to happen.
    pub async fn subscribe_newsletter(&self, subscriber: &NewsletterSubscriber) -> RelayOutcome {
        let url = format!(
            "{}/lists/{}/members",
            self.config.mailchimp_base_url, self.config.mailchimp_audience_id
        );
        let body = json!({
            "email_address": subscriber.email,
            "status": "subscribed",
            "merge_fields": {
                "FNAME": subscriber.first_name.as_deref().unwrap_or(""),
                "LNAME": subscriber.last_name.as_deref().unwrap_or(""),
            },
            "tags": subscriber.tags.clone().unwrap_or_default(),
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.mailchimp_api_key)
            .json(&body)
            .send()
            .await;

        match response {
            Ok(resp) if resp.status().is_success() => {
                RelayOutcome::ok("Successfully subscribed to newsletter")
            }
            Ok(resp) => {
                let error: MailchimpError = resp.json().await.unwrap_or_default();
                if error.title.as_deref() == Some("Member Exists") {
                    return RelayOutcome::ok("Email is already subscribed");
                }
                tracing::warn!(detail = ?error.detail, "Mailchimp subscription rejected");
                RelayOutcome::failed("Failed to subscribe to newsletter")
            }
            Err(e) => {
                tracing::warn!(error = %e, "Mailchimp subscription failed");
                RelayOutcome::failed("Failed to subscribe to newsletter")
            }
        }
    }

    /// Create (or update) a contact in Brevo. Duplicates count as success.
    pub async fn add_brevo_contact(&self, contact: &BrevoContact) -> RelayOutcome {
        let url = format!("{}/contacts", self.config.brevo_base_url);
        let body = json!({
            "email": contact.email,
            "attributes": contact.attributes.clone().unwrap_or_default(),
            "listIds": contact.list_ids.clone().unwrap_or_else(|| vec![1]),
            "updateEnabled": true,
        });

        let response = self
            .client
            .post(&url)
            .header("api-key", &self.config.brevo_api_key)
            .json(&body)
            .send()
            .await;

        match response {
            Ok(resp) if resp.status().is_success() => {
                RelayOutcome::ok("Contact added successfully")
            }
            Ok(resp) => {
                let error: BrevoError = resp.json().await.unwrap_or_default();
                if error.code.as_deref() == Some("duplicate_parameter") {
                    return RelayOutcome::ok("Contact already exists");
                }
                tracing::warn!(message = ?error.message, "Brevo contact rejected");
                RelayOutcome::failed("Failed to add contact")
            }
            Err(e) => {
                tracing::warn!(error = %e, "Brevo contact creation failed");
                RelayOutcome::failed("Failed to add contact")
            }
        }
    }

    /// Send the welcome email through Brevo's transactional endpoint.
    pub async fn send_welcome(&self, email: &str, name: &str) -> RelayOutcome {
        let url = format!("{}/smtp/email", self.config.brevo_base_url);
        let body = json!({
            "sender": { "name": "Tech Dev Club", "email": "hello@techdevclub.com" },
            "to": [{ "email": email, "name": name }],
            "subject": "Welcome to Tech Dev Club!",
            "htmlContent": format!(
                "<p>Hi {name},</p><p>Welcome aboard! You now have access to all community \
                 events and resources.</p><p>— The Tech Dev Club team</p>"
            ),
        });

        let response = self
            .client
            .post(&url)
            .header("api-key", &self.config.brevo_api_key)
            .json(&body)
            .send()
            .await;

        match response {
            Ok(resp) if resp.status().is_success() => RelayOutcome::ok("Welcome email sent"),
            Ok(resp) => {
                tracing::warn!(status = %resp.status(), "welcome email rejected");
                RelayOutcome::failed("Failed to send welcome email")
            }
            Err(e) => {
                tracing::warn!(error = %e, "welcome email failed");
                RelayOutcome::failed("Failed to send welcome email")
            }
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct MailchimpError {
    title: Option<String>,
    detail: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct BrevoError {
    code: Option<String>,
    message: Option<String>,
}
