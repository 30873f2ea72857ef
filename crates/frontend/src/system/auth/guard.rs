use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use super::context::use_auth;
use super::session::{AccessDecision, UNAUTHORIZED_PATH};

/// Renders children only for a signed-in user holding `permission`.
/// Without a session it redirects to login (keeping the current path as
/// `next`), without the permission to `/unauthorized`. Re-evaluated when the
/// session changes, so logout or an expired token leaves the page.
#[component]
pub fn RequirePermission(
    #[prop(optional, into)] permission: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = use_auth();
    let location = use_location();

    move || {
        let path = location.pathname.get();
        match auth.access(permission.as_deref(), &path) {
            AccessDecision::Granted => children().into_any(),
            AccessDecision::Login(target) => {
                log::debug!("{} requires a session", path);
                view! { <Redirect path=target /> }.into_any()
            }
            AccessDecision::Unauthorized => {
                log::warn!("{} denied: missing {:?}", path, permission);
                view! { <Redirect path=UNAUTHORIZED_PATH /> }.into_any()
            }
        }
    }
}
