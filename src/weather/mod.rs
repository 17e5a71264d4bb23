//! OpenWeatherMap client.
//!
//! Wraps the provider's current-conditions and 5-day forecast endpoints and
//! maps the responses into local display shapes. Configuration (API key,
//! base URL) is injected at construction; see [`crate::config`].

mod advice;

pub use advice::{advise, days_until, is_upcoming};

use chrono::DateTime;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::models::{DailyForecast, TemperatureRange, WeatherSnapshot};

/// Why a weather fetch produced no snapshot.
///
/// Callers treat every variant the same way: the snapshot is unavailable and
/// the caller falls back to its "unavailable" display state. The variants
/// exist for logging.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("provider response missing conditions")]
    EmptyConditions,
}

#[derive(Debug, Clone)]
pub struct WeatherClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl WeatherClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            client: Client::new(),
        }
    }

    /// Current conditions for a city by name.
    pub async fn current(&self, city: &str) -> Result<WeatherSnapshot, WeatherError> {
        let url = format!("{}/weather", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("q", city), ("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Status(status));
        }

        let raw: CurrentConditions = response.json().await?;
        let condition = raw
            .weather
            .into_iter()
            .next()
            .ok_or(WeatherError::EmptyConditions)?;

        Ok(WeatherSnapshot {
            location: format!("{}, {}", raw.name, raw.sys.country),
            temperature: raw.main.temp.round() as i32,
            description: condition.description,
            humidity: raw.main.humidity,
            wind_speed: raw.wind.speed,
            icon: condition.icon,
            feels_like: raw.main.feels_like.round() as i32,
            // Provider reports metres; display wants kilometres.
            visibility: raw.visibility / 1000.0,
        })
    }

    /// Five-day forecast for a city, condensed from three-hour intervals.
    pub async fn forecast(&self, city: &str) -> Result<Vec<DailyForecast>, WeatherError> {
        let url = format!("{}/forecast", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("q", city), ("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Status(status));
        }

        let raw: ForecastResponse = response.json().await?;
        Ok(condense_forecast(raw.list))
    }

    /// Provider icon URL for an opaque icon code.
    pub fn icon_url(code: &str) -> String {
        format!("https://openweathermap.org/img/wn/{code}@2x.png")
    }
}

/// Group three-hour entries by calendar day and keep the first five days.
/// Min/max span the whole day; description, icon, and humidity come from the
/// midday entry.
fn condense_forecast(entries: Vec<ForecastEntry>) -> Vec<DailyForecast> {
    let mut days: Vec<(String, Vec<ForecastEntry>)> = Vec::new();
    for entry in entries {
        let date = DateTime::from_timestamp(entry.dt, 0)
            .map(|dt| dt.date_naive().to_string())
            .unwrap_or_default();
        match days.last_mut() {
            Some((last, bucket)) if *last == date => bucket.push(entry),
            _ => days.push((date, vec![entry])),
        }
    }

    days.into_iter()
        .take(5)
        .filter_map(|(date, bucket)| {
            let temps: Vec<f64> = bucket.iter().map(|e| e.main.temp).collect();
            let min = temps.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = temps.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            let midday = bucket.get(bucket.len() / 2)?;
            let condition = midday.weather.first()?;
            Some(DailyForecast {
                date,
                temperature: TemperatureRange {
                    min: min.round() as i32,
                    max: max.round() as i32,
                },
                description: condition.description.clone(),
                icon: condition.icon.clone(),
                humidity: midday.main.humidity,
            })
        })
        .collect()
}

// ============================================================
// Provider wire shapes
// ============================================================

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    name: String,
    sys: SysSection,
    main: MainReadings,
    wind: WindReadings,
    weather: Vec<Condition>,
    #[serde(default)]
    visibility: f64,
}

#[derive(Debug, Deserialize)]
struct SysSection {
    country: String,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: f64,
    feels_like: f64,
    humidity: u32,
}

#[derive(Debug, Deserialize)]
struct WindReadings {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    list: Vec<ForecastEntry>,
}

#[derive(Debug, Deserialize)]
struct ForecastEntry {
    dt: i64,
    main: ForecastMain,
    weather: Vec<Condition>,
}

#[derive(Debug, Deserialize)]
struct ForecastMain {
    temp: f64,
    humidity: u32,
}
