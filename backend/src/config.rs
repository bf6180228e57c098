//! Runtime configuration read from the environment.

use std::time::Duration;

pub const DEFAULT_FEED_URL: &str = "https://data.nasa.gov/resource/y77d-th95.geojson";

#[derive(Debug, Clone, PartialEq)]
pub struct FeedConfig {
    pub feed_url: String,
    pub app_token: Option<String>,
    pub request_timeout: Duration,
    pub image_base_url: String,
    pub listen_addr: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            app_token: None,
            request_timeout: Duration::from_secs(30),
            image_base_url: String::new(),
            listen_addr: "127.0.0.1:8080".to_string(),
        }
    }
}

impl FeedConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let timeout_secs = std::env::var("METEORITE_FEED_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(defaults.request_timeout.as_secs());
        Self {
            feed_url: std::env::var("METEORITE_FEED_URL").unwrap_or(defaults.feed_url),
            app_token: std::env::var("METEORITE_FEED_APP_TOKEN").ok().filter(|t| !t.is_empty()),
            request_timeout: Duration::from_secs(timeout_secs),
            image_base_url: std::env::var("PLACEMARK_IMAGE_BASE_URL").unwrap_or(defaults.image_base_url),
            listen_addr: std::env::var("SERVER_LISTEN_ADDR").unwrap_or(defaults.listen_addr),
        }
    }
}
