//! Client configuration
//!
//! Defaults are embedded as JSON; the API location can be overridden at
//! build time with `ACADEMY_API_BASE_URL`.
use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub max_visible_pages: u32,
    pub search_debounce_ms: u32,
    pub page_sizes: PageSizes,
}

/// `per_page` sent by each list
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PageSizes {
    pub services: u32,
    pub instructors: u32,
    pub schedules: u32,
    pub bookings: u32,
    pub users: u32,
    pub reviews: u32,
    /// Public catalogue grids
    pub catalogue: u32,
    /// Dropdown sources (service list of a filter, ...)
    pub lookup: u32,
}

const DEFAULT_CONFIG: &str = r#"{
    "api_base_url": "http://127.0.0.1:8000/api",
    "max_visible_pages": 5,
    "search_debounce_ms": 300,
    "page_sizes": {
        "services": 10,
        "instructors": 10,
        "schedules": 15,
        "bookings": 15,
        "users": 15,
        "reviews": 15,
        "catalogue": 9,
        "lookup": 100
    }
}"#;

const API_BASE_URL_OVERRIDE: Option<&str> = option_env!("ACADEMY_API_BASE_URL");

static CONFIG: Lazy<ClientConfig> =
    Lazy::new(|| ClientConfig::from_json(DEFAULT_CONFIG, API_BASE_URL_OVERRIDE));

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8000/api".to_string(),
            max_visible_pages: 5,
            search_debounce_ms: 300,
            page_sizes: PageSizes {
                services: 10,
                instructors: 10,
                schedules: 15,
                bookings: 15,
                users: 15,
                reviews: 15,
                catalogue: 9,
                lookup: 100,
            },
        }
    }
}

impl ClientConfig {
    /// Embedded defaults plus build-time overrides, parsed once
    pub fn load() -> &'static ClientConfig {
        &CONFIG
    }

    fn from_json(json: &str, api_base_override: Option<&str>) -> Self {
        let mut config = match serde_json::from_str::<ClientConfig>(json) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Invalid embedded client config, using defaults: {}", e);
                ClientConfig::default()
            }
        };

        if let Some(url) = api_base_override.filter(|u| !u.trim().is_empty()) {
            config.api_base_url = url.trim().to_string();
        }
        config.api_base_url = config.api_base_url.trim_end_matches('/').to_string();
        config
    }
}
