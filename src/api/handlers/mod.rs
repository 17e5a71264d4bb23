use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::auth;
use crate::catalog::{FilterState, Selection};
use crate::email::{BrevoContact, NewsletterSubscriber, RelayOutcome};
use crate::models::*;
use crate::weather;

// ============================================================
// Error Handling
// ============================================================

fn bad_request(msg: impl Into<String>) -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, msg.into())
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Resource Catalog
// ============================================================

/// Query parameters for the filtered resource listing. Absent parameters and
/// the literal `all` both mean "no constraint" for that dimension.
#[derive(Debug, Deserialize)]
pub struct ListResourcesQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub difficulty: Option<String>,
}

impl ListResourcesQuery {
    fn into_filter(self) -> Result<FilterState, (StatusCode, String)> {
        let kind = match self.kind.as_deref() {
            None | Some("all") => Selection::Any,
            Some(s) => Selection::Only(
                ResourceType::from_str(s)
                    .ok_or_else(|| bad_request(format!("Unknown resource type: {s}")))?,
            ),
        };
        let difficulty = match self.difficulty.as_deref() {
            None | Some("all") => Selection::Any,
            Some(s) => Selection::Only(
                Difficulty::from_str(s)
                    .ok_or_else(|| bad_request(format!("Unknown difficulty: {s}")))?,
            ),
        };
        Ok(FilterState {
            search: self.search.unwrap_or_default(),
            category: Selection::from_param(self.category),
            kind,
            difficulty,
        })
    }
}

pub async fn list_resources(
    State(state): State<AppState>,
    Query(query): Query<ListResourcesQuery>,
) -> Result<Json<Vec<Resource>>, (StatusCode, String)> {
    let filter = query.into_filter()?;
    let matched = state
        .catalog
        .filter(&filter)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(matched))
}

pub async fn featured_resources(State(state): State<AppState>) -> Json<Vec<Resource>> {
    Json(state.catalog.featured().into_iter().cloned().collect())
}

/// Filter option lists. Categories and types are derived from the live
/// catalog; difficulties are fixed.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResourceOptions {
    pub categories: Vec<String>,
    pub types: Vec<String>,
    pub difficulties: Vec<String>,
}

pub async fn resource_options(State(state): State<AppState>) -> Json<ResourceOptions> {
    Json(ResourceOptions {
        categories: state
            .catalog
            .categories()
            .into_iter()
            .map(String::from)
            .collect(),
        types: state
            .catalog
            .types()
            .into_iter()
            .map(|t| t.as_str().to_string())
            .collect(),
        difficulties: state
            .catalog
            .difficulties()
            .into_iter()
            .map(|d| d.as_str().to_string())
            .collect(),
    })
}

pub async fn get_resource(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Resource>, (StatusCode, String)> {
    state
        .catalog
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "Resource not found".to_string()))
}

// ============================================================
// Weather Enrichment
// ============================================================

#[derive(Debug, Deserialize)]
pub struct EventWeatherQuery {
    /// Free-form location; the first comma-delimited segment is the city.
    pub location: String,
    /// Event start, RFC 3339.
    pub date: DateTime<Utc>,
}

/// Weather for an event. `relevant: false` means the event is outside the
/// 5-day window; `relevant: true` with a null snapshot means the fetch
/// failed and the caller should show its "unavailable" state.
#[derive(Debug, Serialize, Deserialize)]
pub struct EventWeather {
    pub relevant: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advice: Option<WeatherAdvice>,
}

pub async fn event_weather(
    State(state): State<AppState>,
    Query(query): Query<EventWeatherQuery>,
) -> Json<EventWeather> {
    if !weather::is_upcoming(query.date, Utc::now()) {
        return Json(EventWeather {
            relevant: false,
            weather: None,
            advice: None,
        });
    }

    // "London, UK" degrades to "London" for the provider lookup.
    let city = query
        .location
        .split(',')
        .next()
        .unwrap_or(&query.location)
        .trim();

    match state.weather.current(city).await {
        Ok(snapshot) => {
            let advice = weather::advise(&snapshot);
            Json(EventWeather {
                relevant: true,
                weather: Some(snapshot),
                advice: Some(advice),
            })
        }
        Err(e) => {
            tracing::warn!(city, error = %e, "weather snapshot unavailable");
            Json(EventWeather {
                relevant: true,
                weather: None,
                advice: None,
            })
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ForecastQuery {
    pub location: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ForecastSummary {
    pub available: bool,
    pub days: Vec<DailyForecast>,
}

pub async fn weather_forecast(
    State(state): State<AppState>,
    Query(query): Query<ForecastQuery>,
) -> Json<ForecastSummary> {
    let city = query
        .location
        .split(',')
        .next()
        .unwrap_or(&query.location)
        .trim();

    match state.weather.forecast(city).await {
        Ok(days) => Json(ForecastSummary {
            available: true,
            days,
        }),
        Err(e) => {
            tracing::warn!(city, error = %e, "forecast unavailable");
            Json(ForecastSummary {
                available: false,
                days: Vec::new(),
            })
        }
    }
}

// ============================================================
// Signup Relay
// ============================================================

pub async fn signup(
    State(state): State<AppState>,
    Json(form): Json<SignupForm>,
) -> Result<Json<AuthResponse>, (StatusCode, Json<AuthResponse>)> {
    if let Err(e) = auth::validate(&form) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(AuthResponse {
                success: false,
                message: Some(e.to_string()),
                data: None,
            }),
        ));
    }

    let request = SignupRequest::from_form(&form);
    match state.auth.signup(&request).await {
        Ok(envelope) => {
            if envelope.success {
                state.analytics.signup("email");
            }
            Ok(Json(envelope))
        }
        Err(e) => {
            tracing::warn!(error = %e, "auth backend unreachable");
            Err((
                StatusCode::BAD_GATEWAY,
                Json(AuthResponse {
                    success: false,
                    message: Some(
                        "Network error. Please check your connection and try again.".to_string(),
                    ),
                    data: None,
                }),
            ))
        }
    }
}

// ============================================================
// Email Relays
// ============================================================

#[derive(Debug, Deserialize)]
pub struct SubscribeBody {
    pub subscriber: NewsletterSubscriber,
}

pub async fn subscribe_newsletter(
    State(state): State<AppState>,
    Json(body): Json<SubscribeBody>,
) -> Json<RelayOutcome> {
    let outcome = state.email.subscribe_newsletter(&body.subscriber).await;
    if outcome.success {
        state
            .analytics
            .event("newsletter_subscribe", serde_json::json!({}));
    }
    Json(outcome)
}

#[derive(Debug, Deserialize)]
pub struct BrevoContactBody {
    pub contact: BrevoContact,
}

pub async fn add_brevo_contact(
    State(state): State<AppState>,
    Json(body): Json<BrevoContactBody>,
) -> Json<RelayOutcome> {
    Json(state.email.add_brevo_contact(&body.contact).await)
}

#[derive(Debug, Deserialize)]
pub struct WelcomeBody {
    pub email: String,
    pub name: String,
}

pub async fn send_welcome(
    State(state): State<AppState>,
    Json(body): Json<WelcomeBody>,
) -> Json<RelayOutcome> {
    Json(state.email.send_welcome(&body.email, &body.name).await)
}
