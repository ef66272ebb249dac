//! API utilities for frontend-backend communication
//!
//! Every list endpoint is paginated; [`fetch_page`] requests one page and
//! decodes the envelope. Each call issues a fresh request.

use contracts::shared::pagination::PaginatedResponse;
use gloo_net::http::Request;
use serde::{de::DeserializeOwned, Serialize};

use crate::shared::config::ClientConfig;
use crate::system::auth::storage;

/// Get the base URL for API requests
pub fn api_base() -> String {
    ClientConfig::load().api_base_url.clone()
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/schedules");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Query parameters of a list request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageQuery {
    pub page: u32,
    pub per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl PageQuery {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
            role: None,
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn to_query_string(&self) -> String {
        serde_qs::to_string(self).unwrap_or_default()
    }
}

fn get_auth_header() -> Option<String> {
    storage::get_access_token().map(|token| format!("Bearer {}", token))
}

/// Fetch one page of `path`
pub async fn fetch_page<T>(path: &str, query: &PageQuery) -> Result<PaginatedResponse<T>, String>
where
    T: DeserializeOwned,
{
    let url = format!("{}?{}", api_url(path), query.to_query_string());
    log::debug!("GET {}", url);

    let mut request = Request::get(&url).header("Accept", "application/json");
    if let Some(auth_header) = get_auth_header() {
        request = request.header("Authorization", &auth_header);
    }

    let response = request
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if response.status() == 401 {
        log::warn!("GET {} rejected: unauthorized", url);
        return Err("Unauthorized".to_string());
    }
    if !response.ok() {
        log::warn!("GET {} failed: {}", url, response.status());
        return Err(format!("Failed to fetch {}: {}", path, response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    PaginatedResponse::from_json(&body).map_err(|e| format!("Failed to parse response: {:#}", e))
}
