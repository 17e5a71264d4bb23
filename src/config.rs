//! Runtime configuration.
//!
//! Every credential and base URL is injected here and passed to clients at
//! construction. Nothing in the crate reads the environment except
//! [`AppConfig::from_env`], and nothing hardcodes a key.

use crate::email::EmailConfig;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub weather_base_url: String,
    pub weather_api_key: String,
    pub auth_base_url: String,
    pub email: EmailConfig,
    pub analytics_enabled: bool,
}

impl AppConfig {
    /// Read configuration from `TDC_*` environment variables, with local
    /// defaults for everything except credentials (which default empty and
    /// simply yield provider rejections when unset).
    pub fn from_env() -> Self {
        let mailchimp_api_key = env_or("TDC_MAILCHIMP_API_KEY", "");
        let mailchimp_base_url = std::env::var("TDC_MAILCHIMP_BASE_URL")
            .unwrap_or_else(|_| EmailConfig::mailchimp_url_for_key(&mailchimp_api_key));

        Self {
            weather_base_url: env_or(
                "TDC_WEATHER_BASE_URL",
                "https://api.openweathermap.org/data/2.5",
            ),
            weather_api_key: env_or("TDC_WEATHER_API_KEY", ""),
            auth_base_url: env_or("TDC_AUTH_BASE_URL", "http://localhost:5000"),
            email: EmailConfig {
                mailchimp_api_key,
                mailchimp_audience_id: env_or("TDC_MAILCHIMP_AUDIENCE_ID", ""),
                mailchimp_base_url,
                brevo_api_key: env_or("TDC_BREVO_API_KEY", ""),
                brevo_base_url: env_or("TDC_BREVO_BASE_URL", "https://api.brevo.com/v3"),
            },
            analytics_enabled: std::env::var("TDC_ANALYTICS")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailchimp_url_derives_datacenter_from_key_suffix() {
        assert_eq!(
            EmailConfig::mailchimp_url_for_key("abc123-us12"),
            "https://us12.api.mailchimp.com/3.0"
        );
        // A key without a dash uses the whole key as the prefix; the
        // provider rejects it, which is the behavior we want surfaced.
        assert_eq!(
            EmailConfig::mailchimp_url_for_key("abc123"),
            "https://abc123.api.mailchimp.com/3.0"
        );
    }
}
