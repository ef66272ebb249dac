use contracts::domain::a001_service::aggregate::Service;
use contracts::shared::pagination::PaginatedResponse;

use crate::shared::api_utils::{fetch_page, PageQuery};
use crate::shared::config::ClientConfig;

pub async fn fetch_services(page: u32) -> Result<PaginatedResponse<Service>, String> {
    let per_page = ClientConfig::load().page_sizes.services;
    fetch_page("/services", &PageQuery::new(page, per_page)).await
}

/// Public catalogue grid
pub async fn fetch_catalogue(page: u32) -> Result<PaginatedResponse<Service>, String> {
    let per_page = ClientConfig::load().page_sizes.catalogue;
    fetch_page("/services", &PageQuery::new(page, per_page)).await
}

/// First page of services, large enough to fill a filter dropdown
pub async fn fetch_service_options() -> Result<Vec<Service>, String> {
    let per_page = ClientConfig::load().page_sizes.lookup;
    let page = fetch_page::<Service>("/services", &PageQuery::new(1, per_page)).await?;
    Ok(page.data)
}
