use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::menu::{is_active, visible_items};
use crate::shared::icons::icon;
use crate::system::auth::use_auth;

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = use_auth();
    let location = use_location();

    view! {
        <nav class="app-sidebar__content">
            <a
                href="/"
                class="app-sidebar__item"
                class:app-sidebar__item--active=move || location.pathname.get() == "/"
            >
                <div class="app-sidebar__item-content">
                    {icon("home")}
                    <span>"Inicio"</span>
                </div>
            </a>
            // menu is recomputed when the session changes
            {move || {
                visible_items(|p| auth.has_permission(p))
                    .into_iter()
                    .map(|item| {
                        view! {
                            <a
                                href=item.url
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || {
                                    is_active(&item, &location.pathname.get())
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(item.icon)}
                                    <span>{item.label}</span>
                                </div>
                            </a>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}
