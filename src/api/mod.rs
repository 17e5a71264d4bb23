mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::analytics::Analytics;
use crate::auth::AuthClient;
use crate::catalog::Catalog;
use crate::email::EmailClient;
use crate::weather::WeatherClient;

/// Everything the handlers need, built once at startup. Clients are
/// constructed explicitly from [`crate::config::AppConfig`]; there are no
/// process-wide singletons.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub weather: WeatherClient,
    pub auth: AuthClient,
    pub email: EmailClient,
    pub analytics: Analytics,
}

pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        // Resource catalog
        .route("/resources", get(handlers::list_resources))
        .route("/resources/featured", get(handlers::featured_resources))
        .route("/resources/options", get(handlers::resource_options))
        .route("/resources/{id}", get(handlers::get_resource))
        // Weather enrichment
        .route("/weather/event", get(handlers::event_weather))
        .route("/weather/forecast", get(handlers::weather_forecast))
        // Signup relay
        .route("/auth/signup", post(handlers::signup))
        // Email relays
        .route("/email/subscribe", post(handlers::subscribe_newsletter))
        .route("/email/brevo-contact", post(handlers::add_brevo_contact))
        .route("/email/send-welcome", post(handlers::send_welcome))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
