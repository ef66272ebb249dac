use contracts::domain::a005_review::aggregate::Review;
use contracts::shared::pagination::PaginatedResponse;

use crate::shared::api_utils::{fetch_page, PageQuery};
use crate::shared::config::ClientConfig;

pub async fn fetch_reviews(page: u32) -> Result<PaginatedResponse<Review>, String> {
    let per_page = ClientConfig::load().page_sizes.reviews;
    fetch_page("/reviews", &PageQuery::new(page, per_page)).await
}
