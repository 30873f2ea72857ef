use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::shared::page_frame::{page_id, PageCategory, PageFrame};

/// Target of the "Nuevo" and edit links; forms live outside this application
#[component]
pub fn NotAvailablePage(entity: &'static str) -> impl IntoView {
    let params = use_params_map();
    let subject = move || match params.with(|p| p.get("id")) {
        Some(id) => format!("La edición del registro {} no está disponible.", id),
        None => "El alta de registros no está disponible.".to_string(),
    };

    view! {
        <PageFrame page_id=page_id(entity, PageCategory::System) category=PageCategory::System>
            <div class="page__message">
                <h2>"Función no disponible"</h2>
                <p>{subject}</p>
                <a href=format!("/{}", entity) class="button button--secondary">"Volver al listado"</a>
            </div>
        </PageFrame>
    }
}
