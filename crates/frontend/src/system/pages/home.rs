use leptos::prelude::*;

use crate::layout::menu::visible_items;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::system::auth::use_auth;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let greeting = move || {
        auth.session()
            .map(|s| format!("Hola, {}", s.user.display_name()))
            .unwrap_or_default()
    };

    view! {
        <PageFrame page_id="home--system" category=PageCategory::System>
            <div class="page__header">
                <h1 class="page__title">{greeting}</h1>
            </div>
            <div class="home-menu">
                {move || {
                    let items = visible_items(|p| auth.has_permission(p));
                    if items.is_empty() {
                        return view! {
                            <p class="home-menu__empty">"Su usuario no tiene secciones habilitadas."</p>
                        }
                        .into_any();
                    }
                    items
                        .into_iter()
                        .map(|item| {
                            view! {
                                <a href=item.url class="home-menu__card">
                                    {icon(item.icon)}
                                    <span>{item.label}</span>
                                </a>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>
        </PageFrame>
    }
}
