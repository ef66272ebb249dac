use contracts::system::users::Role;
use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::storage;

pub const LOGIN_PATH: &str = "/login";

/// Outcome of checking a route against the session role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Granted,
    Redirect(&'static str),
}

/// Landing page of each role
pub fn dashboard_path(role: Role) -> &'static str {
    match role {
        Role::SuperAdmin | Role::Admin => "/admin/dashboard",
        Role::Instructor => "/instructor/dashboard",
        Role::User => "/user/dashboard",
        Role::Unknown => "/",
    }
}

/// Signed-out visitors go to the login page, signed-in users without the
/// right role go to their own dashboard.
pub fn check_access(role: Option<Role>, allowed: &[Role]) -> RouteAccess {
    match role {
        None => RouteAccess::Redirect(LOGIN_PATH),
        Some(role) if allowed.contains(&role) => RouteAccess::Granted,
        Some(role) => RouteAccess::Redirect(dashboard_path(role)),
    }
}

/// Component that renders its children only for the allowed roles
#[component]
pub fn RoleRoute(
    /// Roles allowed on this route
    allowed_roles: Vec<Role>,
    children: ChildrenFn,
) -> impl IntoView {
    let access = check_access(storage::get_cached_role(), &allowed_roles);

    match access {
        RouteAccess::Granted => children(),
        RouteAccess::Redirect(path) => {
            log::debug!("route guard: redirecting to {}", path);
            view! { <Redirect path=path /> }.into_any()
        }
    }
}

/// Component that requires any signed-in user
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    if storage::get_access_token().is_some() {
        children()
    } else {
        view! { <Redirect path=LOGIN_PATH /> }.into_any()
    }
}
