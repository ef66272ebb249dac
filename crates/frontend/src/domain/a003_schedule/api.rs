use contracts::domain::a003_schedule::aggregate::Schedule;
use contracts::shared::pagination::PaginatedResponse;

use crate::shared::api_utils::{fetch_page, PageQuery};
use crate::shared::config::ClientConfig;

pub async fn fetch_schedules(page: u32) -> Result<PaginatedResponse<Schedule>, String> {
    let per_page = ClientConfig::load().page_sizes.schedules;
    fetch_page("/schedules", &PageQuery::new(page, per_page)).await
}
