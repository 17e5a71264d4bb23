use chrono::{DateTime, Utc};

use crate::models::{AdviceLevel, WeatherAdvice, WeatherSnapshot};

/// Signed whole-day distance between now and an event, at calendar
/// granularity: both instants are truncated to their dates first, so an
/// event later today is day 0.
pub fn days_until(event: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (event.date_naive() - now.date_naive()).num_days()
}

/// Weather is shown only for events between today and five days out,
/// inclusive on both ends.
pub fn is_upcoming(event: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    (0..=5).contains(&days_until(event, now))
}

/// Map a snapshot to attendee advice.
///
/// The rules are an ordered list, first match wins. Rain outranks cold: a
/// rainy 2°C day gets the umbrella advice, not the cold advice.
pub fn advise(weather: &WeatherSnapshot) -> WeatherAdvice {
    let description = weather.description.to_lowercase();
    let temp = weather.temperature;

    if description.contains("rain") || description.contains("drizzle") {
        WeatherAdvice {
            level: AdviceLevel::Warning,
            message: "Rain expected — bring an umbrella!".to_string(),
            icon: "🌧️".to_string(),
        }
    } else if temp < 5 {
        WeatherAdvice {
            level: AdviceLevel::Info,
            message: "Cold weather — dress warmly!".to_string(),
            icon: "🧥".to_string(),
        }
    } else if temp > 30 {
        WeatherAdvice {
            level: AdviceLevel::Warning,
            message: "Hot weather — stay hydrated!".to_string(),
            icon: "☀️".to_string(),
        }
    } else if description.contains("snow") {
        WeatherAdvice {
            level: AdviceLevel::Warning,
            message: "Snow expected — plan for delays!".to_string(),
            icon: "❄️".to_string(),
        }
    } else {
        WeatherAdvice {
            level: AdviceLevel::Success,
            message: "Great weather for the event!".to_string(),
            icon: "✨".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn snapshot(temperature: i32, description: &str) -> WeatherSnapshot {
        WeatherSnapshot {
            location: "London, GB".to_string(),
            temperature,
            description: description.to_string(),
            humidity: 70,
            wind_speed: 3.5,
            icon: "10d".to_string(),
            feels_like: temperature,
            visibility: 10.0,
        }
    }

    #[test]
    fn event_later_today_is_day_zero() {
        let now = Utc.with_ymd_and_hms(2025, 6, 10, 9, 0, 0).unwrap();
        let tonight = Utc.with_ymd_and_hms(2025, 6, 10, 19, 0, 0).unwrap();
        assert_eq!(days_until(tonight, now), 0);
        assert!(is_upcoming(tonight, now));
    }

    #[test]
    fn window_is_inclusive_at_five_days() {
        let now = Utc.with_ymd_and_hms(2025, 6, 10, 12, 0, 0).unwrap();
        assert!(is_upcoming(now + Duration::days(5), now));
        assert!(!is_upcoming(now + Duration::days(6), now));
    }

    #[test]
    fn past_events_are_not_upcoming() {
        let now = Utc.with_ymd_and_hms(2025, 6, 10, 12, 0, 0).unwrap();
        assert!(!is_upcoming(now - Duration::days(1), now));
    }

    #[test]
    fn rain_outranks_cold() {
        let advice = advise(&snapshot(2, "light rain"));
        assert_eq!(advice.level, AdviceLevel::Warning);
        assert!(advice.message.contains("umbrella"));
    }

    #[test]
    fn cold_without_rain_is_info() {
        let advice = advise(&snapshot(2, "overcast clouds"));
        assert_eq!(advice.level, AdviceLevel::Info);
        assert!(advice.message.contains("Cold"));
    }

    #[test]
    fn heat_warns_above_thirty() {
        let advice = advise(&snapshot(31, "clear sky"));
        assert_eq!(advice.level, AdviceLevel::Warning);
        assert!(advice.message.contains("hydrated"));
    }

    #[test]
    fn snow_warns_when_mild() {
        // Snow at 6°C: the cold rule does not fire, the snow rule does.
        let advice = advise(&snapshot(6, "light snow"));
        assert_eq!(advice.level, AdviceLevel::Warning);
        assert!(advice.message.contains("Snow"));
    }

    #[test]
    fn default_is_success() {
        let advice = advise(&snapshot(18, "few clouds"));
        assert_eq!(advice.level, AdviceLevel::Success);
    }
}
