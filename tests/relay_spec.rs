//! Client-level specs for the external collaborators, run against stub
//! providers bound to ephemeral ports.

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use tech_dev_club::auth::AuthClient;
use tech_dev_club::email::{BrevoContact, EmailClient, EmailConfig, NewsletterSubscriber};
use tech_dev_club::models::SignupRequest;
use tech_dev_club::weather::{WeatherClient, WeatherError};

async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn email_client(base: &str) -> EmailClient {
    EmailClient::new(EmailConfig {
        mailchimp_api_key: "key-us12".to_string(),
        mailchimp_audience_id: "aud1".to_string(),
        mailchimp_base_url: base.to_string(),
        brevo_api_key: "brevo-key".to_string(),
        brevo_base_url: base.to_string(),
    })
}

fn subscriber() -> NewsletterSubscriber {
    NewsletterSubscriber {
        email: "ada@example.com".to_string(),
        first_name: None,
        last_name: None,
        tags: None,
    }
}

mod weather_client {
    use super::*;

    #[tokio::test]
    async fn maps_provider_fields_into_the_snapshot() {
        let stub = Router::new().route(
            "/weather",
            get(|| async {
                Json(json!({
                    "name": "Oslo",
                    "sys": { "country": "NO" },
                    "main": { "temp": 17.6, "feels_like": 16.2, "humidity": 55 },
                    "wind": { "speed": 2.4 },
                    "weather": [{ "description": "few clouds", "icon": "02d" }],
                    "visibility": 10000
                }))
            }),
        );
        let base = spawn_stub(stub).await;
        let client = WeatherClient::new(&base, "k");

        let snapshot = client.current("Oslo").await.expect("snapshot");
        assert_eq!(snapshot.location, "Oslo, NO");
        assert_eq!(snapshot.temperature, 18); // 17.6 rounds up
        assert_eq!(snapshot.feels_like, 16);
        assert_eq!(snapshot.humidity, 55);
        assert_eq!(snapshot.visibility, 10.0); // metres to km
        assert_eq!(snapshot.icon, "02d");
    }

    #[tokio::test]
    async fn non_success_status_is_an_error_not_a_panic() {
        let stub = Router::new().route(
            "/weather",
            get(|| async { (StatusCode::NOT_FOUND, Json(json!({ "message": "city not found" }))) }),
        );
        let base = spawn_stub(stub).await;
        let client = WeatherClient::new(&base, "k");

        match client.current("Atlantis").await {
            Err(WeatherError::Status(status)) => assert_eq!(status, StatusCode::NOT_FOUND),
            other => panic!("expected Status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_conditions_array_is_malformed() {
        let stub = Router::new().route(
            "/weather",
            get(|| async {
                Json(json!({
                    "name": "Oslo",
                    "sys": { "country": "NO" },
                    "main": { "temp": 17.6, "feels_like": 16.2, "humidity": 55 },
                    "wind": { "speed": 2.4 },
                    "weather": [],
                    "visibility": 10000
                }))
            }),
        );
        let base = spawn_stub(stub).await;
        let client = WeatherClient::new(&base, "k");

        assert!(matches!(
            client.current("Oslo").await,
            Err(WeatherError::EmptyConditions)
        ));
    }
}

mod mailchimp_relay {
    use super::*;

    #[tokio::test]
    async fn already_subscribed_counts_as_success() {
        let stub = Router::new().route(
            "/lists/aud1/members",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "title": "Member Exists", "detail": "already a member" })),
                )
            }),
        );
        let base = spawn_stub(stub).await;

        let outcome = email_client(&base).subscribe_newsletter(&subscriber()).await;
        assert!(outcome.success);
        assert_eq!(outcome.message, "Email is already subscribed");
    }

    #[tokio::test]
    async fn other_rejections_fail_with_a_generic_message() {
        let stub = Router::new().route(
            "/lists/aud1/members",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "title": "Invalid Resource" })),
                )
            }),
        );
        let base = spawn_stub(stub).await;

        let outcome = email_client(&base).subscribe_newsletter(&subscriber()).await;
        assert!(!outcome.success);
    }
}

mod brevo_relay {
    use super::*;

    #[tokio::test]
    async fn duplicate_contact_counts_as_success() {
        let stub = Router::new().route(
            "/contacts",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "code": "duplicate_parameter", "message": "Contact exists" })),
                )
            }),
        );
        let base = spawn_stub(stub).await;

        let contact = BrevoContact {
            email: "ada@example.com".to_string(),
            attributes: None,
            list_ids: None,
        };
        let outcome = email_client(&base).add_brevo_contact(&contact).await;
        assert!(outcome.success);
        assert_eq!(outcome.message, "Contact already exists");
    }
}

mod auth_client {
    use super::*;

    #[tokio::test]
    async fn decodes_the_envelope_even_on_rejection_statuses() {
        let stub = Router::new().route(
            "/api/auth/signup",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "success": false, "message": "Email exists" })),
                )
            }),
        );
        let base = spawn_stub(stub).await;
        let client = AuthClient::new(&base);

        let request = SignupRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "Abc12345".to_string(),
        };
        let envelope = client.signup(&request).await.expect("envelope decodes");
        assert!(!envelope.success);
        assert_eq!(envelope.message.as_deref(), Some("Email exists"));
    }
}
