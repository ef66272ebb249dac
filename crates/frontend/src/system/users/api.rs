use contracts::shared::pagination::PaginatedResponse;
use contracts::system::users::{Role, User};

use crate::shared::api_utils::{fetch_page, PageQuery};
use crate::shared::config::ClientConfig;

/// Fetch one page of accounts, optionally limited to one role
pub async fn fetch_users(role: Option<Role>, page: u32) -> Result<PaginatedResponse<User>, String> {
    let config = ClientConfig::load();
    let per_page = match role {
        Some(_) => config.page_sizes.users,
        None => config.page_sizes.lookup,
    };
    let mut query = PageQuery::new(page, per_page);
    if let Some(role) = role {
        query = query.with_role(role.code());
    }
    fetch_page("/users", &query).await
}
