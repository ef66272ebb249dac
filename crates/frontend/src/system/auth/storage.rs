use contracts::system::users::{Role, User};
use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "auth_token";
const USER_KEY: &str = "user_data";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    get_local_storage()?.get_item(ACCESS_TOKEN_KEY).ok()?
}

/// Signed-in user cached at login
pub fn get_cached_user() -> Option<User> {
    let raw = get_local_storage()?.get_item(USER_KEY).ok()??;
    parse_cached_user(&raw)
}

/// Role of the cached user, `None` when nobody is signed in
pub fn get_cached_role() -> Option<Role> {
    get_cached_user().map(|u| u.role)
}

fn parse_cached_user(raw: &str) -> Option<User> {
    match serde_json::from_str::<User>(raw) {
        Ok(user) => Some(user),
        Err(e) => {
            log::warn!("Ignoring unreadable cached user: {}", e);
            None
        }
    }
}
