use leptos::prelude::*;

use super::super::{ENDPOINT, ENTITY};
use crate::shared::detail::{DetailConfig, DetailPage, DetailTab, FieldSpec};

pub fn detail_config() -> DetailConfig {
    DetailConfig {
        title: "Proveedor",
        endpoint: ENDPOINT,
        caption_path: "name",
        list_url: "/proveedores",
        tabs: vec![
            DetailTab::fields(
                "General",
                vec![
                    FieldSpec::text("Razón social", "name"),
                    FieldSpec::text("CUIT", "taxId"),
                    FieldSpec::flag("Activo", "isActive"),
                    FieldSpec::date("Alta", "createdAt"),
                ],
            ),
            DetailTab::fields(
                "Contacto",
                vec![
                    FieldSpec::text("Contacto", "contactName"),
                    FieldSpec::text("Email", "email"),
                    FieldSpec::text("Teléfono", "phone"),
                    FieldSpec::text("Dirección", "address"),
                ],
            ),
            DetailTab::json(),
        ],
    }
}

#[component]
pub fn ProviderDetailPage() -> impl IntoView {
    view! { <DetailPage entity=ENTITY config=detail_config() /> }
}
