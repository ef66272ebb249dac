use contracts::domain::a002_instructor::aggregate::Instructor;
use contracts::shared::pagination::PaginatedResponse;

use crate::shared::api_utils::{fetch_page, PageQuery};
use crate::shared::config::ClientConfig;

pub async fn fetch_instructors(page: u32) -> Result<PaginatedResponse<Instructor>, String> {
    let per_page = ClientConfig::load().page_sizes.instructors;
    fetch_page("/instructors", &PageQuery::new(page, per_page)).await
}

/// Public instructor grid
pub async fn fetch_instructor_catalogue(page: u32) -> Result<PaginatedResponse<Instructor>, String> {
    let per_page = ClientConfig::load().page_sizes.catalogue;
    fetch_page("/instructors", &PageQuery::new(page, per_page)).await
}
