use serde::{Deserialize, Serialize};

/// Current conditions at a location, already shaped for display.
///
/// Ephemeral: fetched per request, never stored. Temperatures are rounded to
/// whole degrees Celsius, visibility is converted from metres to kilometres.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    /// "City, CC" label as reported by the provider.
    pub location: String,
    pub temperature: i32,
    pub description: String,
    pub humidity: u32,
    pub wind_speed: f64,
    /// Opaque provider icon code, e.g. "10d".
    pub icon: String,
    pub feels_like: i32,
    pub visibility: f64,
}

/// One day of the 5-day forecast, condensed from the provider's
/// three-hour intervals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyForecast {
    pub date: String,
    pub temperature: TemperatureRange,
    pub description: String,
    pub icon: String,
    pub humidity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemperatureRange {
    pub min: i32,
    pub max: i32,
}

/// What to tell attendees about the conditions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherAdvice {
    #[serde(rename = "type")]
    pub level: AdviceLevel,
    pub message: String,
    pub icon: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AdviceLevel {
    Warning,
    Info,
    Success,
}
