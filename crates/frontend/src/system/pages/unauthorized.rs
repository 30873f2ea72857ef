use leptos::prelude::*;

use crate::shared::page_frame::{PageCategory, PageFrame};

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <PageFrame page_id="unauthorized--system" category=PageCategory::System>
            <div class="page__message">
                <h2>"Acceso denegado"</h2>
                <p>"No tiene permisos para ver esta sección."</p>
                <a href="/" class="button button--secondary">"Volver al inicio"</a>
            </div>
        </PageFrame>
    }
}
