//! Application shell: top header, navigation sidebar and the content area.

pub mod menu;
mod sidebar;
mod top_header;

pub use sidebar::Sidebar;
pub use top_header::TopHeader;

use leptos::prelude::*;

use crate::system::auth::use_auth;

/// Frame around every page; header and sidebar only with a session
#[component]
pub fn MainLayout(children: Children) -> impl IntoView {
    let auth = use_auth();

    view! {
        <div class="app-layout">
            <Show when=move || auth.is_authenticated()>
                <TopHeader />
            </Show>
            <div class="app-layout__body">
                <Show when=move || auth.is_authenticated()>
                    <aside class="app-sidebar">
                        <Sidebar />
                    </aside>
                </Show>
                <main class="app-layout__content">{children()}</main>
            </div>
        </div>
    }
}
