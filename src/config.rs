//! Application Configuration
//!
//! Defaults baked into the binary, overridable at build time through
//! `JOB_LANDER_*` environment variables.

use std::fmt;
use std::str::FromStr;

use log::LevelFilter;

pub const DEFAULT_API_URL: &str = "https://job-lander-backend.fly.dev";
pub const DEFAULT_TOAST_MS: u32 = 2000;
pub const DEFAULT_NOT_FOUND_REDIRECT_MS: u32 = 3000;
pub const DEFAULT_TIMESERIES_POINTS: u32 = 6;

/// Bucket size for the timeseries endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interval {
    Day,
    #[default]
    Week,
    Month,
}

impl Interval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::Day => "day",
            Interval::Week => "week",
            Interval::Month => "month",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(Interval::Day),
            "week" => Ok(Interval::Week),
            "month" => Ok(Interval::Month),
            other => Err(format!("unknown interval '{}'", other)),
        }
    }
}

/// Runtime settings for the whole app
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// API base URL without trailing slash
    pub api_base_url: String,
    pub log_level: LevelFilter,
    /// Toast auto-close delay
    pub toast_ms: u32,
    /// Delay before the 404 page sends the user home
    pub not_found_redirect_ms: u32,
    pub timeseries_points: u32,
    pub timeseries_interval: Interval,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            log_level: LevelFilter::Info,
            toast_ms: DEFAULT_TOAST_MS,
            not_found_redirect_ms: DEFAULT_NOT_FOUND_REDIRECT_MS,
            timeseries_points: DEFAULT_TIMESERIES_POINTS,
            timeseries_interval: Interval::Week,
        }
    }
}

impl AppConfig {
    /// Build from the variables captured at compile time
    pub fn from_env() -> Self {
        Self::from_lookup(|key| {
            let value = match key {
                "JOB_LANDER_API_URL" => option_env!("JOB_LANDER_API_URL"),
                "JOB_LANDER_LOG" => option_env!("JOB_LANDER_LOG"),
                "JOB_LANDER_TOAST_MS" => option_env!("JOB_LANDER_TOAST_MS"),
                "JOB_LANDER_NOT_FOUND_REDIRECT_MS" => option_env!("JOB_LANDER_NOT_FOUND_REDIRECT_MS"),
                "JOB_LANDER_TIMESERIES_POINTS" => option_env!("JOB_LANDER_TIMESERIES_POINTS"),
                "JOB_LANDER_TIMESERIES_INTERVAL" => option_env!("JOB_LANDER_TIMESERIES_INTERVAL"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }

    /// Build from an arbitrary key lookup; bad values keep the default
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("JOB_LANDER_API_URL") {
            let url = url.trim().trim_end_matches('/');
            if url.is_empty() {
                log::warn!("[CONFIG] JOB_LANDER_API_URL is empty, using {}", DEFAULT_API_URL);
            } else {
                config.api_base_url = url.to_string();
            }
        }
        if let Some(level) = lookup("JOB_LANDER_LOG") {
            config.log_level = parse_or_default("JOB_LANDER_LOG", &level, config.log_level);
        }
        if let Some(ms) = lookup("JOB_LANDER_TOAST_MS") {
            config.toast_ms = parse_or_default("JOB_LANDER_TOAST_MS", &ms, config.toast_ms);
        }
        if let Some(ms) = lookup("JOB_LANDER_NOT_FOUND_REDIRECT_MS") {
            config.not_found_redirect_ms =
                parse_or_default("JOB_LANDER_NOT_FOUND_REDIRECT_MS", &ms, config.not_found_redirect_ms);
        }
        if let Some(points) = lookup("JOB_LANDER_TIMESERIES_POINTS") {
            let points = parse_or_default("JOB_LANDER_TIMESERIES_POINTS", &points, config.timeseries_points);
            // zero points would make an empty chart forever
            if points > 0 {
                config.timeseries_points = points;
            }
        }
        if let Some(interval) = lookup("JOB_LANDER_TIMESERIES_INTERVAL") {
            config.timeseries_interval =
                parse_or_default("JOB_LANDER_TIMESERIES_INTERVAL", &interval, config.timeseries_interval);
        }

        config
    }
}

fn parse_or_default<T>(key: &str, raw: &str, default: T) -> T
where
    T: FromStr + fmt::Debug,
{
    match raw.trim().parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            log::warn!("[CONFIG] Ignoring invalid {}={:?}, keeping {:?}", key, raw, default);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(config.timeseries_interval, Interval::Week);
    }

    #[test]
    fn test_overrides_applied() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("JOB_LANDER_API_URL", "http://127.0.0.1:8000/"),
            ("JOB_LANDER_LOG", "debug"),
            ("JOB_LANDER_TOAST_MS", "500"),
            ("JOB_LANDER_TIMESERIES_POINTS", "12"),
            ("JOB_LANDER_TIMESERIES_INTERVAL", "Month"),
        ]));
        assert_eq!(config.api_base_url, "http://127.0.0.1:8000");
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.toast_ms, 500);
        assert_eq!(config.timeseries_points, 12);
        assert_eq!(config.timeseries_interval, Interval::Month);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("JOB_LANDER_API_URL", "  "),
            ("JOB_LANDER_LOG", "loud"),
            ("JOB_LANDER_NOT_FOUND_REDIRECT_MS", "-1"),
            ("JOB_LANDER_TIMESERIES_POINTS", "0"),
            ("JOB_LANDER_TIMESERIES_INTERVAL", "fortnight"),
        ]));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_interval_display() {
        assert_eq!(Interval::Day.to_string(), "day");
        assert_eq!("WEEK".parse::<Interval>(), Ok(Interval::Week));
    }
}
