//! Top bar: application title, current user and logout.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::shared::icons::icon;
use crate::system::auth::session::LOGIN_PATH;
use crate::system::auth::use_auth;

#[component]
pub fn TopHeader() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let logout = move |_| {
        auth.sign_out();
        navigate(LOGIN_PATH, Default::default());
    };

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Gestión"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("users")}
                    <span>
                        {move || {
                            auth.session()
                                .map(|s| s.user.display_name().to_string())
                                .unwrap_or_default()
                        }}
                    </span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Cerrar sesión">
                    {icon("logout")}
                </button>
            </div>
        </header>
    }
}
