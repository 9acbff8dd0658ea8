use crate::sdk::util::rate_limit::DEFAULT_GEOCODE_RATE_PER_SEC;
use std::env;
use std::num::NonZeroU32;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_BBOX_PADDING: f64 = 0.1;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got \"{value}\"")]
    InvalidValue {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeocoderConfig {
    pub base_url: String,
    pub user_agent: String,
    pub rate_per_sec: NonZeroU32,
    /// `None` waits on a lookup indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            rate_per_sec: DEFAULT_GEOCODE_RATE_PER_SEC,
            timeout: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub geocoder: GeocoderConfig,
    pub strict_bounds: bool,
    /// Extra margin around the fitted bounding box, as a fraction of its span.
    pub bbox_padding: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            geocoder: GeocoderConfig::default(),
            strict_bounds: false,
            bbox_padding: DEFAULT_BBOX_PADDING,
        }
    }
}

impl AppConfig {
    /// Reads settings from the process environment, after loading `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(url) = lookup("GEOCODER_BASE_URL") {
            config.geocoder.base_url = url;
        }
        if let Some(agent) = lookup("GEOCODER_USER_AGENT") {
            config.geocoder.user_agent = agent;
        }
        if let Some(value) = lookup("GEOCODER_RATE_PER_SEC") {
            config.geocoder.rate_per_sec = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "GEOCODER_RATE_PER_SEC",
                expected: "a positive integer",
                value: value.clone(),
            })?;
        }
        if let Some(value) = lookup("GEOCODER_TIMEOUT_SECS") {
            let secs: u64 = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "GEOCODER_TIMEOUT_SECS",
                expected: "a whole number of seconds",
                value: value.clone(),
            })?;
            config.geocoder.timeout = Some(Duration::from_secs(secs));
        }
        if let Some(value) = lookup("WAYPOINT_STRICT_BOUNDS") {
            config.strict_bounds = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "WAYPOINT_STRICT_BOUNDS",
                expected: "true or false",
                value: value.clone(),
            })?;
        }
        if let Some(value) = lookup("WAYPOINT_BBOX_PADDING") {
            config.bbox_padding = value
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|p| p.is_finite() && *p >= 0.0)
                .ok_or_else(|| ConfigError::InvalidValue {
                    key: "WAYPOINT_BBOX_PADDING",
                    expected: "a non-negative number",
                    value: value.clone(),
                })?;
        }

        Ok(config)
    }
}
