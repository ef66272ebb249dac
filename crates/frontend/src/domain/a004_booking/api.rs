use contracts::domain::a004_booking::aggregate::Booking;
use contracts::shared::pagination::PaginatedResponse;

use crate::shared::api_utils::{fetch_page, PageQuery};
use crate::shared::config::ClientConfig;

/// Bookings visible to the caller: own bookings for customers, all for admins
pub async fn fetch_bookings(page: u32) -> Result<PaginatedResponse<Booking>, String> {
    let per_page = ClientConfig::load().page_sizes.bookings;
    fetch_page("/bookings", &PageQuery::new(page, per_page)).await
}
